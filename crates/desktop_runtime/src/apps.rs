use crate::model::AppId;
use desktop_app_about::AboutApp;
use desktop_app_contract::AppMountContext;
use desktop_app_links::LinksApp;
use desktop_app_papers::PapersApp;
use desktop_app_projects::ProjectsApp;
use desktop_app_settings::SettingsApp;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub launcher_label: &'static str,
    pub desktop_icon_label: &'static str,
    /// Short glyph shown on desktop icons and taskbar buttons.
    pub glyph: &'static str,
    pub show_in_start_menu: bool,
    pub show_on_desktop: bool,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        app_id: AppId::About,
        launcher_label: "About Me",
        desktop_icon_label: "About",
        glyph: "\u{1F464}",
        show_in_start_menu: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Papers,
        launcher_label: "Papers",
        desktop_icon_label: "Papers",
        glyph: "\u{1F4C4}",
        show_in_start_menu: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Links,
        launcher_label: "Links",
        desktop_icon_label: "Links",
        glyph: "\u{1F517}",
        show_in_start_menu: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Projects,
        launcher_label: "Projects",
        desktop_icon_label: "Projects",
        glyph: "\u{1F4C1}",
        show_in_start_menu: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: AppId::Settings,
        launcher_label: "System Settings",
        desktop_icon_label: "Settings",
        glyph: "\u{2699}",
        show_in_start_menu: false,
        show_on_desktop: false,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn start_menu_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_start_menu)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(app_id: AppId) -> AppDescriptor {
    match app_id {
        AppId::About => APP_REGISTRY[0],
        AppId::Papers => APP_REGISTRY[1],
        AppId::Links => APP_REGISTRY[2],
        AppId::Projects => APP_REGISTRY[3],
        AppId::Settings => APP_REGISTRY[4],
    }
}

pub fn render_window_contents(app_id: AppId, context: AppMountContext) -> View {
    let AppMountContext {
        window_id,
        services,
    } = context;
    let app = match app_id {
        AppId::About => view! { <AboutApp /> }.into_view(),
        AppId::Papers => view! { <PapersApp services /> }.into_view(),
        AppId::Links => view! { <LinksApp services /> }.into_view(),
        AppId::Projects => view! { <ProjectsApp /> }.into_view(),
        AppId::Settings => view! { <SettingsApp services /> }.into_view(),
    };
    view! {
        <div class="window-app" data-app=app_id.as_str() data-window-id=window_id>
            {app}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn descriptors_are_indexed_by_app_id() {
        for app_id in AppId::ALL {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
        assert_eq!(app_registry().len(), AppId::ALL.len());
    }

    #[test]
    fn settings_is_reachable_only_from_the_taskbar() {
        let start: Vec<AppId> = start_menu_apps().iter().map(|d| d.app_id).collect();
        assert_eq!(
            start,
            vec![AppId::About, AppId::Papers, AppId::Links, AppId::Projects]
        );
        assert!(desktop_icon_apps()
            .iter()
            .all(|d| d.app_id != AppId::Settings));
    }
}
