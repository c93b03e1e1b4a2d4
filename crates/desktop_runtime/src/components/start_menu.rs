use super::*;
use system_ui::LauncherMenu;

use super::a11y::{focus_first_menu_item, handle_menu_roving_keydown};

pub(super) const START_MENU_ID: &str = "desktop-start-menu";
pub(super) const START_BUTTON_ID: &str = "desktop-start-button";

fn start_menu_item_id(app_id: AppId) -> String {
    format!("start-menu-item-{}", app_id.as_str())
}

/// Returns `true` when a pointer-down landed inside the start menu or on its toggle button.
#[cfg(target_arch = "wasm32")]
pub(super) fn event_within_start_surfaces(ev: &web_sys::MouseEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    [START_MENU_ID, START_BUTTON_ID].iter().any(|id| {
        document
            .get_element_by_id(id)
            .is_some_and(|surface| surface.contains(Some(&target)))
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn event_within_start_surfaces(_: &web_sys::MouseEvent) -> bool {
    false
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_memo(move |_| runtime.state.with(|desktop| desktop.start_menu_open));

    create_effect(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open && was_open != Some(true) {
            focus_first_menu_item(START_MENU_ID);
        }
        is_open
    });

    let launch = move |app_id: AppId| {
        runtime.dispatch_action(DesktopAction::OpenApp {
            app_id,
            viewport: runtime.measure_viewport(),
        });
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <LauncherMenu id=START_MENU_ID aria_label="Start menu">
                <div
                    class="start-menu-list"
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        handle_menu_roving_keydown(&ev, START_MENU_ID)
                    }
                >
                    {apps::start_menu_apps()
                        .into_iter()
                        .map(|entry| {
                            let app_id = entry.app_id;
                            view! {
                                <button
                                    type="button"
                                    id=start_menu_item_id(app_id)
                                    class="start-menu-item"
                                    role="menuitem"
                                    data-app=app_id.as_str()
                                    on:click=move |_| launch(app_id)
                                >
                                    <span class="start-menu-glyph" aria-hidden="true">
                                        {entry.glyph}
                                    </span>
                                    <span class="start-menu-label">{entry.launcher_label}</span>
                                    {app_id
                                        .uses_content_database()
                                        .then(|| view! { <span class="start-menu-hint">"Database"</span> })}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </LauncherMenu>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn menu_item_ids_are_stable_per_app() {
        assert_eq!(start_menu_item_id(AppId::Papers), "start-menu-item-papers");
    }
}
