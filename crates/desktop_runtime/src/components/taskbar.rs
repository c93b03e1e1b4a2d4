use super::*;
use system_ui::{Taskbar as TaskbarRoot, TaskbarButton, TaskbarSection};

use super::start_menu::{START_BUTTON_ID, START_MENU_ID};

const CLOCK_REFRESH: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    hour: u32,
    minute: u32,
}

impl ClockReading {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_clock(reading: ClockReading) -> String {
    format!("{:02}:{:02}", reading.hour, reading.minute)
}

fn taskbar_window_aria_label(win: &WindowRecord, active: bool) -> String {
    let title = win.title();
    if win.minimized {
        format!("{title}, minimized")
    } else if active {
        format!("{title}, focused")
    } else {
        title.to_string()
    }
}

fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(ClockReading::now());
    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(ClockReading::now()), CLOCK_REFRESH)
    {
        on_cleanup(move || interval.clear());
    }

    let start_open = Signal::derive(move || state.with(|desktop| desktop.start_menu_open));
    let theme = Signal::derive(move || state.with(|desktop| desktop.theme));
    let active_window = create_memo(move |_| state.with(|desktop| desktop.active_window_id().cloned()));

    let open_app = move |app_id: AppId| {
        runtime.dispatch_action(DesktopAction::OpenApp {
            app_id,
            viewport: runtime.measure_viewport(),
        });
    };

    view! {
        <TaskbarRoot aria_label="Taskbar">
            <TaskbarSection ui_slot="start" aria_label="Start">
                <TaskbarButton
                    ui_slot="start-button"
                    id=START_BUTTON_ID
                    aria_controls=START_MENU_ID.to_string()
                    aria_haspopup="menu".to_string()
                    aria_expanded=start_open
                    aria_label="Open start menu".to_string()
                    pressed=start_open
                    on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu))
                >
                    <span class="taskbar-start-label">"Start"</span>
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="quick-launch" aria_label="Quick launch">
                {apps::app_registry()
                    .iter()
                    .map(|entry| {
                        let app_id = entry.app_id;
                        view! {
                            <TaskbarButton
                                ui_slot="quick-launch"
                                data_app=app_id.as_str().to_string()
                                aria_label=format!("Open {}", entry.launcher_label)
                                title=entry.launcher_label.to_string()
                                on_click=Callback::new(move |_| open_app(app_id))
                            >
                                <span aria-hidden="true">{entry.glyph}</span>
                            </TaskbarButton>
                        }
                    })
                    .collect_view()}
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || state.get().windows
                    key=|win| win.id.0.clone()
                    let:win
                >
                    {{
                        let window_id = store_value(win.id.clone());
                        let app_id = win.app_id;
                        let record = create_memo(move |_| {
                            state.with(|desktop| window_id.with_value(|id| desktop.window(id).cloned()))
                        });
                        let is_active = Signal::derive(move || {
                            active_window.with(|active| {
                                window_id.with_value(|id| active.as_ref() == Some(id))
                            })
                        });
                        let minimized = Signal::derive(move || {
                            record.with(|win| win.as_ref().is_some_and(|win| win.minimized))
                        });
                        view! {
                            <TaskbarButton
                                ui_slot="running-window"
                                data_app=app_id.as_str().to_string()
                                aria_pressed=is_active
                                selected=is_active
                                aria_label=Signal::derive(move || {
                                    record.with(|win| {
                                        win.as_ref()
                                            .map(|win| taskbar_window_aria_label(win, is_active.get()))
                                            .unwrap_or_default()
                                    })
                                })
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id: window_id.get_value(),
                                    })
                                })
                            >
                                <span aria-hidden="true">{apps::app_descriptor(app_id).glyph}</span>
                                <span
                                    class="taskbar-window-title"
                                    data-minimized=move || minimized.get().to_string()
                                >
                                    {app_id.title()}
                                </span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray" aria_label="System tray">
                <TaskbarButton
                    ui_slot="theme-toggle"
                    aria_label=Signal::derive(move || theme_toggle_label(theme.get()).to_string())
                    title=Signal::derive(move || theme_toggle_label(theme.get()).to_string())
                    on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::ToggleTheme))
                >
                    <span aria-hidden="true">
                        {move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263E}" }}
                    </span>
                </TaskbarButton>
                <time class="taskbar-clock" aria-live="off">
                    {move || format_clock(clock.get())}
                </time>
            </TaskbarSection>
        </TaskbarRoot>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    fn record(minimized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId("links-2".to_string()),
            app_id: AppId::Links,
            rect: WindowRect {
                x: 96,
                y: 96,
                w: 720,
                h: 500,
            },
            z_index: 3,
            minimized,
        }
    }

    #[test]
    fn clock_is_zero_padded_hours_and_minutes() {
        assert_eq!(format_clock(ClockReading { hour: 7, minute: 5 }), "07:05");
        assert_eq!(format_clock(ClockReading { hour: 23, minute: 59 }), "23:59");
    }

    #[test]
    fn running_window_labels_reflect_window_state() {
        assert_eq!(taskbar_window_aria_label(&record(true), false), "Links, minimized");
        assert_eq!(taskbar_window_aria_label(&record(false), true), "Links, focused");
        assert_eq!(taskbar_window_aria_label(&record(false), false), "Links");
    }

    #[test]
    fn theme_toggle_names_the_target_theme() {
        assert_eq!(theme_toggle_label(Theme::Dark), "Switch to light theme");
        assert_eq!(theme_toggle_label(Theme::Light), "Switch to dark theme");
    }
}
