//! Built-in System Settings desktop app for theme and wallpaper preferences.
//!
//! The app reads the current preferences through [`desktop_app_contract::AppearanceService`]
//! and sends changes back to the runtime, so the desktop repaints immediately.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{accent_rgba, Theme, WallpaperId, WallpaperPreset};
use system_ui::prelude::*;

fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Enable Light Mode",
        Theme::Light => "Enable Dark Mode",
    }
}

fn theme_toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    }
}

fn preset_card_style(preset: &WallpaperPreset, active: bool) -> String {
    if active {
        format!(
            "border-color: {}; box-shadow: 0 16px 30px -20px {};",
            preset.accent,
            accent_rgba(preset.accent, 0.35)
        )
    } else {
        String::new()
    }
}

#[component]
/// System Settings window contents.
pub fn SettingsApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let appearance = services.appearance;
    let theme = appearance.theme;
    let wallpaper = appearance.wallpaper;
    let toggle_glow = Signal::derive(move || {
        format!(
            "box-shadow: 0 12px 20px -16px {};",
            accent_rgba(wallpaper.get().preset().accent, 0.35)
        )
    });

    view! {
        <div class="app-settings">
            <Pane ui_slot="appearance" aria_label="Appearance">
                <h2 class="app-section-title">"Appearance"</h2>
                <p class="app-section-note">"Switch between light and dark modes instantly."</p>
                <Button
                    variant=ButtonVariant::Primary
                    layout_class="settings-theme-toggle"
                    style=toggle_glow
                    on_click=Callback::new(move |_| appearance.toggle_theme())
                >
                    <span aria-hidden="true">{move || theme_toggle_glyph(theme.get())}</span>
                    {move || theme_toggle_label(theme.get())}
                </Button>
            </Pane>

            <Pane ui_slot="wallpaper" aria_label="Wallpaper">
                <h3 class="app-section-title">"Wallpaper"</h3>
                <p class="app-section-note">"Choose a desktop backdrop. Changes apply immediately."</p>
                <div class="settings-wallpaper-grid" role="radiogroup" aria-label="Wallpaper presets">
                    {WallpaperId::ALL
                        .into_iter()
                        .map(|id| {
                            let preset = id.preset();
                            let active = Signal::derive(move || wallpaper.get() == id);
                            view! {
                                <Button
                                    layout_class="settings-wallpaper-card"
                                    role="radio"
                                    aria_pressed=active
                                    selected=active
                                    style=Signal::derive(move || {
                                        preset_card_style(id.preset(), active.get())
                                    })
                                    on_click=Callback::new(move |_| {
                                        if wallpaper.get_untracked() != id {
                                            appearance.set_wallpaper(id);
                                        }
                                    })
                                >
                                    <span
                                        class="settings-wallpaper-swatch"
                                        style=move || {
                                            format!("background: {};", id.preset().background(theme.get()))
                                        }
                                    ></span>
                                    <span class="settings-wallpaper-label">{preset.label}</span>
                                    <span class="settings-wallpaper-description">
                                        {preset.description}
                                    </span>
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </Pane>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_toggle_names_the_target_mode() {
        assert_eq!(theme_toggle_label(Theme::Dark), "Enable Light Mode");
        assert_eq!(theme_toggle_label(Theme::Light), "Enable Dark Mode");
    }

    #[test]
    fn only_the_active_card_carries_the_accent() {
        let preset = WallpaperId::Matrix.preset();
        assert_eq!(preset_card_style(preset, false), "");
        assert_eq!(
            preset_card_style(preset, true),
            "border-color: #22c55e; box-shadow: 0 16px 30px -20px rgba(34, 197, 94, 0.35);"
        );
    }
}
