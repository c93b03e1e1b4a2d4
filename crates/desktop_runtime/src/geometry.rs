//! Viewport clamping for window rectangles.

use crate::model::{Viewport, WindowRect, WINDOW_EDGE_PADDING, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH};

/// Effective `(min, max)` extent for one axis of `available` pixels.
///
/// When the axis is too small to hold the configured minimum, the minimum shrinks to fit.
fn axis_limits(available: i32, configured_min: i32) -> (i32, i32) {
    let max = if available > 0 { available } else { configured_min };
    let min = configured_min.min(max);
    (min, max.max(min))
}

fn clamp_axis(position: i32, extent: i32, viewport_extent: i32) -> i32 {
    let lower = -WINDOW_EDGE_PADDING;
    let upper = (viewport_extent - extent - WINDOW_EDGE_PADDING).max(lower);
    position.clamp(lower, upper)
}

/// Fits `rect` into `viewport`, reserving the taskbar at the bottom.
///
/// The result is deterministic and idempotent: clamping an already clamped rect returns it
/// unchanged.
pub fn clamp_rect(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let width_area = viewport.width;
    let height_area = viewport.work_area_height();

    let (min_w, max_w) = axis_limits(width_area - 2 * WINDOW_EDGE_PADDING, WINDOW_MIN_WIDTH);
    let (min_h, max_h) = axis_limits(height_area - 2 * WINDOW_EDGE_PADDING, WINDOW_MIN_HEIGHT);

    let w = rect.w.clamp(min_w, max_w);
    let h = rect.h.clamp(min_h, max_h);

    WindowRect {
        x: clamp_axis(rect.x, w, width_area),
        y: clamp_axis(rect.y, h, height_area),
        w,
        h,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn undersized_windows_grow_to_minimums() {
        let clamped = clamp_rect(rect(100, 100, 50, 40), Viewport::new(1280, 800));
        assert_eq!(clamped, rect(100, 100, WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT));
    }

    #[test]
    fn oversized_windows_shrink_to_available_area() {
        let clamped = clamp_rect(rect(0, 0, 5000, 5000), Viewport::new(1000, 700));
        assert_eq!(clamped.w, 1000 - 32);
        assert_eq!(clamped.h, 700 - 48 - 32);
    }

    #[test]
    fn tiny_viewports_shrink_the_effective_minimum() {
        let clamped = clamp_rect(rect(40, 40, 500, 500), Viewport::new(300, 200));
        // 300 - 32 = 268 wide; 200 - 48 - 32 = 120 tall.
        assert_eq!(clamped, rect(16, 16, 268, 120));

        let degenerate = clamp_rect(rect(0, 0, 10, 10), Viewport::new(20, 60));
        assert_eq!(degenerate.w, WINDOW_MIN_WIDTH);
        assert_eq!(degenerate.h, WINDOW_MIN_HEIGHT);
        assert_eq!(degenerate.x, -WINDOW_EDGE_PADDING);
    }

    #[test]
    fn positions_stay_within_edge_padding() {
        let viewport = Viewport::new(1200, 800);
        let far = clamp_rect(rect(4000, 4000, 400, 300), viewport);
        assert_eq!(far.x, 1200 - 400 - 16);
        assert_eq!(far.y, 800 - 48 - 300 - 16);

        let negative = clamp_rect(rect(-900, -900, 400, 300), viewport);
        assert_eq!((negative.x, negative.y), (-16, -16));
    }

    #[test]
    fn clamping_is_idempotent() {
        let viewports = [
            Viewport::new(1920, 1080),
            Viewport::new(640, 480),
            Viewport::new(320, 568),
            Viewport::new(10, 10),
        ];
        let rects = [
            rect(-500, 20, 100, 9000),
            rect(3000, 3000, 800, 600),
            rect(96, 96, 760, 520),
        ];
        for viewport in viewports {
            for input in rects {
                let once = clamp_rect(input, viewport);
                assert_eq!(clamp_rect(once, viewport), once);
            }
        }
    }
}
