//! Pointer-to-bounds math for window drag and resize gestures.
//!
//! These functions only propose new bounds; the reducer commits them through
//! [`crate::geometry::clamp_rect`].

use crate::model::{
    PointerSample, Viewport, WindowRect, WINDOW_EDGE_PADDING, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH,
};

fn bounded(value: i32, lower: i32, upper: i32) -> i32 {
    value.clamp(lower, upper.max(lower))
}

/// Pointer offset from the window's top-left corner, recorded when a drag starts.
pub fn drag_offset(pointer: PointerSample, rect: WindowRect) -> (i32, i32) {
    (pointer.x - rect.x, pointer.y - rect.y)
}

/// Proposed top-left corner while dragging.
///
/// The vertical bound is looser than the horizontal one: a window may be dragged down until
/// its title bar meets the taskbar.
pub fn drag_position(pointer: PointerSample, offset: (i32, i32), viewport: Viewport) -> (i32, i32) {
    let x = bounded(
        pointer.x - offset.0,
        -WINDOW_EDGE_PADDING,
        viewport.width - WINDOW_EDGE_PADDING,
    );
    let y = bounded(
        pointer.y - offset.1,
        -WINDOW_EDGE_PADDING,
        viewport.work_area_height(),
    );
    (x, y)
}

/// Proposed `(width, height)` while resizing from the bottom-right handle.
pub fn resize_size(pointer: PointerSample, rect: WindowRect, viewport: Viewport) -> (i32, i32) {
    let w = bounded(
        pointer.x - rect.x,
        WINDOW_MIN_WIDTH,
        viewport.width - rect.x - WINDOW_EDGE_PADDING,
    );
    let h = bounded(
        pointer.y - rect.y,
        WINDOW_MIN_HEIGHT,
        viewport.work_area_height() - rect.y,
    );
    (w, h)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pointer(x: i32, y: i32) -> PointerSample {
        PointerSample {
            pointer_id: 1,
            x,
            y,
        }
    }

    const RECT: WindowRect = WindowRect {
        x: 100,
        y: 80,
        w: 500,
        h: 400,
    };

    #[test]
    fn drag_keeps_the_grab_offset() {
        let offset = drag_offset(pointer(130, 95), RECT);
        assert_eq!(offset, (30, 15));
        assert_eq!(
            drag_position(pointer(230, 195), offset, Viewport::new(1280, 800)),
            (200, 180)
        );
    }

    #[test]
    fn drag_past_right_edge_stops_at_viewport_minus_padding() {
        let viewport = Viewport::new(1000, 700);
        let (x, _) = drag_position(pointer(5000, 100), (10, 10), viewport);
        assert_eq!(x, 1000 - WINDOW_EDGE_PADDING);
    }

    #[test]
    fn drag_vertical_bound_reaches_the_taskbar() {
        let viewport = Viewport::new(1000, 700);
        assert_eq!(drag_position(pointer(10, 5000), (0, 0), viewport).1, 652);
        assert_eq!(drag_position(pointer(-400, -400), (0, 0), viewport), (-16, -16));
    }

    #[test]
    fn resize_tracks_pointer_within_limits() {
        let viewport = Viewport::new(1280, 800);
        assert_eq!(resize_size(pointer(700, 500), RECT, viewport), (600, 420));
        assert_eq!(
            resize_size(pointer(120, 90), RECT, viewport),
            (WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT)
        );
        assert_eq!(
            resize_size(pointer(9000, 9000), RECT, viewport),
            (1280 - 100 - 16, 800 - 48 - 80)
        );
    }

    #[test]
    fn resize_never_goes_below_minimum_even_near_the_edge() {
        let near_edge = WindowRect { x: 1100, ..RECT };
        let (w, _) = resize_size(pointer(1200, 300), near_edge, Viewport::new(1280, 800));
        assert_eq!(w, WINDOW_MIN_WIDTH);
    }
}
