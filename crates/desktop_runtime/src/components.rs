//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod start_menu;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
use platform_host::Theme;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

use self::{
    a11y::LiveRegion,
    start_menu::{event_within_start_surfaces, StartMenu},
    taskbar::DesktopTaskbar,
    window::DesktopWindow,
};
use crate::{
    apps,
    model::{AppId, PointerSample, WindowId, WindowRecord, WindowRect},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_sample(ev: &web_sys::PointerEvent) -> PointerSample {
    PointerSample {
        pointer_id: ev.pointer_id(),
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Keys that activate a focused desktop icon.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

fn backdrop_style(theme: Theme, desktop: &crate::model::DesktopState) -> String {
    format!(
        "background:{};",
        desktop.preferences.wallpaper.preset().background(theme)
    )
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open_app = move |app_id: AppId| {
        runtime.dispatch_action(DesktopAction::OpenApp {
            app_id,
            viewport: runtime.measure_viewport(),
        });
    };

    view! {
        <DesktopIconGrid>
            {apps::desktop_icon_apps()
                .into_iter()
                .map(|entry| {
                    let app_id = entry.app_id;
                    view! {
                        <DesktopIconButton
                            title=entry.launcher_label
                            aria_label=format!("Open {}", entry.launcher_label)
                            on_click=Callback::new(move |_| {
                                if runtime.host.with_value(|host| host.prefers_coarse_pointer()) {
                                    open_app(app_id);
                                }
                            })
                            on_dblclick=Callback::new(move |_| open_app(app_id))
                            on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                                if is_activation_key(&ev.key()) {
                                    ev.prevent_default();
                                    open_app(app_id);
                                }
                            })
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{entry.glyph}</span>
                            <span class="desktop-icon-label">{entry.desktop_icon_label}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}

#[component]
/// Renders the full desktop shell: wallpaper, icons, windows, start menu and taskbar.
///
/// Must be mounted inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Gesture listeners live on the window so a drag keeps tracking outside the frame.
    let pointer_move_listener = window_event_listener(ev::pointermove, move |ev| {
        let tracked = runtime.interaction.with_untracked(|ui| ui.active_pointer());
        if tracked == Some(ev.pointer_id()) {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_sample(&ev),
                viewport: runtime.measure_viewport(),
            });
        }
    });
    on_cleanup(move || pointer_move_listener.remove());

    let end_gesture = move |ev: web_sys::PointerEvent| {
        let tracked = runtime.interaction.with_untracked(|ui| ui.active_pointer());
        if tracked == Some(ev.pointer_id()) {
            runtime.dispatch_action(DesktopAction::PointerUp {
                pointer_id: ev.pointer_id(),
            });
        }
    };
    let pointer_up_listener = window_event_listener(ev::pointerup, end_gesture);
    on_cleanup(move || pointer_up_listener.remove());
    let pointer_cancel_listener = window_event_listener(ev::pointercancel, end_gesture);
    on_cleanup(move || pointer_cancel_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ClampToViewport {
            viewport: runtime.measure_viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.with_untracked(|desktop| desktop.start_menu_open) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if state.with_untracked(|desktop| desktop.start_menu_open)
            && !event_within_start_surfaces(&ev)
        {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let theme = Signal::derive(move || state.with(|desktop| desktop.theme));
    let announcement = Signal::derive(move || state.with(|desktop| desktop.announcement.clone()));

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            theme=Signal::derive(move || theme.get().as_str().to_string())
        >
            <DesktopBackdrop
                style=Signal::derive(move || state.with(|desktop| backdrop_style(theme.get(), desktop)))
                wallpaper=Signal::derive(move || {
                    state.with(|desktop| desktop.preferences.wallpaper.as_str().to_string())
                })
            >
                <DesktopIcons />
                <DesktopWindowLayer>
                    <For
                        each=move || state.get().windows
                        key=|win| win.id.0.clone()
                        let:win
                    >
                        <DesktopWindow window_id=win.id app_id=win.app_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <StartMenu />
            <DesktopTaskbar />
            <LiveRegion message=announcement />
        </DesktopRoot>
    }
}

#[cfg(test)]
mod tests {
    use platform_host::WallpaperId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DesktopState;

    #[test]
    fn enter_and_space_activate_icons() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn backdrop_follows_wallpaper_and_theme() {
        let mut desktop = DesktopState::default();
        desktop.preferences.wallpaper = WallpaperId::Matrix;
        assert_eq!(
            backdrop_style(Theme::Dark, &desktop),
            format!(
                "background:{};",
                WallpaperId::Matrix.preset().dark_background
            )
        );
    }
}
