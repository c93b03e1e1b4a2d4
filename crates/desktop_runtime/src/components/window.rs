use super::*;
use desktop_app_contract::AppMountContext;
use platform_host::accent_rgba;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{focus_trap::trap_tab_key, host::window_dom_id, model::AppId};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline style for a window frame: placement, stacking and wallpaper-accented chrome.
fn window_frame_style(rect: WindowRect, z_index: u32, accent: &str, active: bool) -> String {
    let border_alpha = if active { 0.65 } else { 0.35 };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};border-color:{};box-shadow:0 18px 48px {};",
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        z_index,
        accent_rgba(accent, border_alpha),
        accent_rgba(accent, 0.22),
    )
}

fn titlebar_style(accent: &str) -> String {
    format!("border-bottom-color:{};", accent_rgba(accent, 0.35))
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId, app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| id.with_value(|id| desktop.window(id).cloned()))
    });
    let is_active = create_memo(move |_| {
        runtime.state.with(|desktop| {
            id.with_value(|id| desktop.active_window_id() == Some(id))
        })
    });
    let visible = move || window.with(|win| win.as_ref().is_some_and(|win| !win.minimized));

    view! {
        <Show when=visible fallback=|| ()>
            <DesktopWindowFrame id app_id window is_active />
        </Show>
    }
}

#[component]
fn DesktopWindowFrame(
    id: StoredValue<WindowId>,
    app_id: AppId,
    window: Memo<Option<WindowRecord>>,
    is_active: Memo<bool>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let frame_ref = create_node_ref::<html::Section>();
    let accent = move || {
        runtime
            .state
            .with(|desktop| desktop.preferences.wallpaper.preset().accent)
    };

    let frame_style = move || {
        window.with(|win| {
            win.as_ref()
                .map(|win| window_frame_style(win.rect, win.z_index, accent(), is_active.get()))
                .unwrap_or_default()
        })
    };

    // The title bar and resize handle stop propagation, so this only sees presses elsewhere.
    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    });
    let trap_tab = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if !is_active.get_untracked() {
            return;
        }
        if let Some(frame) = frame_ref.get_untracked() {
            trap_tab_key(&frame, &ev);
        }
    });
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        if ev.button() == 0 {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
        }
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id: id.get_value(),
            pointer: pointer_sample(&ev),
            button: ev.button(),
        });
    });
    let begin_resize = Callback::new(move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        if ev.button() == 0 {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
        }
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: id.get_value(),
            pointer: pointer_sample(&ev),
            button: ev.button(),
            viewport: runtime.measure_viewport(),
        });
    });
    let minimize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        })
    });
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        })
    });

    let title = app_id.title();
    let contents = apps::render_window_contents(
        app_id,
        AppMountContext {
            window_id: id.with_value(ToString::to_string),
            services: runtime.services.get_value(),
        },
    );

    view! {
        <WindowFrame
            id=id.with_value(window_dom_id)
            node_ref=frame_ref
            style=Signal::derive(frame_style)
            aria_label=title.to_string()
            focused=Signal::derive(move || is_active.get())
            compact=Signal::derive(move || runtime.is_compact())
            on_pointerdown=focus
            on_keydown=trap_tab
        >
            <WindowTitleBar
                style=Signal::derive(move || titlebar_style(accent()))
                on_pointerdown=begin_drag
            >
                <WindowTitle>
                    <span class="window-title-glyph" aria-hidden="true">
                        {apps::app_descriptor(app_id).glyph}
                    </span>
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label=format!("Minimize {title}") on_click=minimize>
                        "\u{2013}"
                    </WindowControlButton>
                    <WindowControlButton aria_label=format!("Close {title}") on_click=close>
                        "\u{00D7}"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || !runtime.is_compact() fallback=|| ()>
                <ResizeHandle
                    edge="bottom-right"
                    aria_label=format!("Resize {title}")
                    on_pointerdown=begin_resize
                />
            </Show>
        </WindowFrame>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn frame_style_places_and_stacks_the_window() {
        let style = window_frame_style(
            WindowRect {
                x: -16,
                y: 96,
                w: 540,
                h: 360,
            },
            7,
            "#22c55e",
            true,
        );
        assert!(style.starts_with("left:-16px;top:96px;width:540px;height:360px;z-index:7;"));
        assert!(style.contains("border-color:rgba(34, 197, 94, 0.65);"));
    }

    #[test]
    fn inactive_frames_use_a_fainter_accent() {
        let rect = WindowRect {
            x: 0,
            y: 0,
            w: 360,
            h: 220,
        };
        let style = window_frame_style(rect, 1, "#60a5fa", false);
        assert!(style.contains("border-color:rgba(96, 165, 250, 0.35);"));
        assert_eq!(titlebar_style("nope"), "border-bottom-color:rgba(96, 165, 250, 0.35);");
    }
}
