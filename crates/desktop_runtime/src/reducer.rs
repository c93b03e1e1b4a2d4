//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::WallpaperId;
use thiserror::Error;

use crate::{
    geometry::clamp_rect,
    interaction::{drag_offset, drag_position, resize_size},
    model::{
        AppId, BootSnapshot, DesktopState, Gesture, InteractionState, PointerSample, Viewport,
        WindowId, WindowRecord, WindowRect, STAGGER_ORIGIN, STAGGER_STEP,
    },
};

/// Primary (usually left) pointer button.
const PRIMARY_BUTTON: i16 = 0;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or raise its existing window.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Viewport used to clamp a newly created window.
        viewport: Viewport,
    },
    /// Raise a window and un-minimize it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Taskbar click: focus a minimized window, minimize any other.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Move (and optionally resize) a window, then re-clamp it.
    UpdateBounds {
        /// Window to update.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
        /// New width, if changing.
        width: Option<i32>,
        /// New height, if changing.
        height: Option<i32>,
        /// Viewport to clamp against.
        viewport: Viewport,
    },
    /// Re-clamp every window after the viewport changed.
    ClampToViewport {
        /// Current viewport.
        viewport: Viewport,
    },
    /// Pointer-down on a window title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer sample at drag start.
        pointer: PointerSample,
        /// Pressed button (`0` is primary).
        button: i16,
    },
    /// Pointer-down on a window resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer sample at resize start.
        pointer: PointerSample,
        /// Pressed button (`0` is primary).
        button: i16,
        /// Current viewport; compact viewports do not resize.
        viewport: Viewport,
    },
    /// Global pointer move.
    PointerMove {
        /// Pointer sample.
        pointer: PointerSample,
        /// Current viewport.
        viewport: Viewport,
    },
    /// Global pointer up.
    PointerUp {
        /// Released pointer id.
        pointer_id: i32,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Select a wallpaper preset.
    SetWallpaper {
        /// Wallpaper preset.
        wallpaper: WallpaperId,
    },
    /// Flip between light and dark theme.
    ToggleTheme,
    /// Replace layout and appearance with a restored snapshot.
    HydrateSnapshot {
        /// Snapshot loaded from storage.
        snapshot: BootSnapshot,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Re-serialize windows and preferences.
    PersistState,
    /// Write the standalone theme key.
    PersistTheme,
    /// Give keyboard focus to the newly active window.
    FocusWindow(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),
    /// The window id counter cannot be advanced without wrapping.
    #[error("window id counter exhausted")]
    WindowIdsExhausted,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// [`RuntimeEffect::PersistState`] is emitted whenever windows or preferences changed, and
/// [`RuntimeEffect::FocusWindow`] whenever a different window became active.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present, and [`ReducerError::WindowIdsExhausted`] when no fresh window id is left. State is
/// left untouched in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let windows_before = state.windows.clone();
    let preferences_before = state.preferences;
    let active_before = state.active_window_id().cloned();
    let mut effects = Vec::new();

    match action {
        DesktopAction::OpenApp { app_id, viewport } => {
            match state.windows.iter().position(|w| w.app_id == app_id) {
                Some(index) => raise_window(state, index),
                None => open_new_window(state, app_id, viewport)?,
            }
            state.start_menu_open = false;
        }
        DesktopAction::FocusWindow { window_id } => {
            let index = window_index(state, &window_id)?;
            raise_window(state, index);
        }
        DesktopAction::CloseWindow { window_id } => {
            let index = window_index(state, &window_id)?;
            state.windows.remove(index);
            release_gesture_for(interaction, &window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let index = window_index(state, &window_id)?;
            minimize_window(state, index);
            release_gesture_for(interaction, &window_id);
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let index = window_index(state, &window_id)?;
            if state.windows[index].minimized {
                raise_window(state, index);
            } else {
                minimize_window(state, index);
                release_gesture_for(interaction, &window_id);
            }
        }
        DesktopAction::UpdateBounds {
            window_id,
            x,
            y,
            width,
            height,
            viewport,
        } => {
            let index = window_index(state, &window_id)?;
            let current = state.windows[index].rect;
            state.windows[index].rect = clamp_rect(
                WindowRect {
                    x,
                    y,
                    w: width.unwrap_or(current.w),
                    h: height.unwrap_or(current.h),
                },
                viewport,
            );
        }
        DesktopAction::ClampToViewport { viewport } => {
            for window in &mut state.windows {
                window.rect = clamp_rect(window.rect, viewport);
            }
        }
        DesktopAction::BeginDrag {
            window_id,
            pointer,
            button,
        } => {
            let index = window_index(state, &window_id)?;
            raise_window(state, index);
            if button == PRIMARY_BUTTON && interaction.gesture == Gesture::Idle {
                interaction.gesture = Gesture::Dragging {
                    pointer_id: pointer.pointer_id,
                    offset: drag_offset(pointer, state.windows[index].rect),
                    window_id,
                };
            }
        }
        DesktopAction::BeginResize {
            window_id,
            pointer,
            button,
            viewport,
        } => {
            let index = window_index(state, &window_id)?;
            raise_window(state, index);
            if button == PRIMARY_BUTTON
                && !viewport.is_compact()
                && interaction.gesture == Gesture::Idle
            {
                interaction.gesture = Gesture::Resizing {
                    pointer_id: pointer.pointer_id,
                    window_id,
                };
            }
        }
        DesktopAction::PointerMove { pointer, viewport } => {
            apply_pointer_move(state, interaction, pointer, viewport);
        }
        DesktopAction::PointerUp { pointer_id } => {
            if interaction.active_pointer() == Some(pointer_id) {
                interaction.gesture = Gesture::Idle;
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SetWallpaper { wallpaper } => {
            state.preferences.wallpaper = wallpaper;
        }
        DesktopAction::ToggleTheme => {
            state.theme = state.theme.toggled();
            state.preferences.theme = Some(state.theme);
            effects.push(RuntimeEffect::PersistTheme);
        }
        DesktopAction::HydrateSnapshot { snapshot } => {
            state.windows = snapshot.windows;
            state.preferences = snapshot.preferences;
            state.theme = snapshot.theme;
            state.z_top = state.z_top.max(snapshot.z_top);
            state.window_counter = state.window_counter.max(snapshot.window_counter);
            interaction.gesture = Gesture::Idle;
        }
    }

    if state.windows != windows_before || state.preferences != preferences_before {
        effects.push(RuntimeEffect::PersistState);
    }
    let active_after = state.active_window_id().cloned();
    if active_after != active_before {
        if let Some(window_id) = active_after {
            effects.push(RuntimeEffect::FocusWindow(window_id));
        }
    }
    Ok(effects)
}

fn window_index(state: &DesktopState, window_id: &WindowId) -> Result<usize, ReducerError> {
    state
        .windows
        .iter()
        .position(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

fn next_z(state: &mut DesktopState) -> u32 {
    state.z_top += 1;
    state.z_top
}

/// Sets the live-region text, toggling a trailing space so a repeated message is re-read.
fn announce(state: &mut DesktopState, message: String) {
    state.announcement = if state.announcement == message {
        format!("{message} ")
    } else {
        message
    };
}

fn raise_window(state: &mut DesktopState, index: usize) {
    let z_index = next_z(state);
    let window = &mut state.windows[index];
    let was_minimized = window.minimized;
    window.z_index = z_index;
    window.minimized = false;
    if was_minimized {
        let title = window.title();
        announce(state, format!("Restored {title}"));
    }
}

fn minimize_window(state: &mut DesktopState, index: usize) {
    let window = &mut state.windows[index];
    window.minimized = true;
    let title = window.title();
    announce(state, format!("Minimized {title}"));
}

fn open_new_window(
    state: &mut DesktopState,
    app_id: AppId,
    viewport: Viewport,
) -> Result<(), ReducerError> {
    let sequence = state
        .window_counter
        .checked_add(1)
        .ok_or(ReducerError::WindowIdsExhausted)?;
    let open_count = state.windows.len() as i32;
    let (w, h) = app_id.default_size();
    let rect = clamp_rect(
        WindowRect {
            x: STAGGER_ORIGIN.0 + open_count * STAGGER_STEP.0,
            y: STAGGER_ORIGIN.1 + open_count * STAGGER_STEP.1,
            w,
            h,
        },
        viewport,
    );
    state.window_counter = sequence;
    let id = WindowId::for_app(app_id, sequence);
    let z_index = next_z(state);
    state.windows.push(WindowRecord {
        id,
        app_id,
        rect,
        z_index,
        minimized: false,
    });
    Ok(())
}

fn release_gesture_for(interaction: &mut InteractionState, window_id: &WindowId) {
    let owns_gesture = match &interaction.gesture {
        Gesture::Idle => false,
        Gesture::Dragging { window_id: id, .. } | Gesture::Resizing { window_id: id, .. } => {
            id == window_id
        }
    };
    if owns_gesture {
        interaction.gesture = Gesture::Idle;
    }
}

fn apply_pointer_move(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerSample,
    viewport: Viewport,
) {
    if interaction.active_pointer() != Some(pointer.pointer_id) {
        return;
    }
    match interaction.gesture.clone() {
        Gesture::Idle => {}
        Gesture::Dragging {
            window_id, offset, ..
        } => {
            let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
                interaction.gesture = Gesture::Idle;
                return;
            };
            let (x, y) = drag_position(pointer, offset, viewport);
            window.rect = clamp_rect(WindowRect { x, y, ..window.rect }, viewport);
        }
        Gesture::Resizing { window_id, .. } => {
            if viewport.is_compact() {
                return;
            }
            let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
                interaction.gesture = Gesture::Idle;
                return;
            };
            let (w, h) = resize_size(pointer, window.rect, viewport);
            window.rect = clamp_rect(WindowRect { w, h, ..window.rect }, viewport);
        }
    }
}
