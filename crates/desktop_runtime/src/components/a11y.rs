//! Live-region announcer and menu keyboard helpers for desktop shell widgets.

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[component]
/// Polite screen-reader live region mirroring the reducer's announcement text.
pub(super) fn LiveRegion(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div
            class="visually-hidden"
            role="status"
            aria-live="polite"
            aria-atomic="true"
            data-ui-slot="live-region"
        >
            {move || message.get()}
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(menu_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]"#) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn active_index(items: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())?;
    items
        .iter()
        .position(|item| item.is_same_node(Some(active.as_ref())))
}

/// Index reached by a roving-focus key, or `None` when the key is not handled.
fn roving_index(key: &str, current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0);
    match key {
        "ArrowDown" => Some((current + 1) % len),
        "ArrowUp" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

/// Focuses the first item of the menu with DOM id `menu_id`.
pub(super) fn focus_first_menu_item(menu_id: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(first) = menu_items(menu_id).first() {
        let _ = first.focus();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = menu_id;
}

/// Handles arrow/Home/End navigation inside a menu, preventing default when handled.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let items = menu_items(menu_id);
        if let Some(next) = roving_index(&ev.key(), active_index(&items), items.len()) {
            ev.prevent_default();
            let _ = items[next].focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (ev, menu_id, roving_index);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn roving_focus_wraps_both_directions() {
        assert_eq!(roving_index("ArrowDown", Some(3), 4), Some(0));
        assert_eq!(roving_index("ArrowUp", Some(0), 4), Some(3));
        assert_eq!(roving_index("ArrowUp", None, 4), Some(3));
        assert_eq!(roving_index("End", Some(1), 4), Some(3));
        assert_eq!(roving_index("Home", Some(2), 4), Some(0));
    }

    #[test]
    fn unrelated_keys_and_empty_menus_are_ignored() {
        assert_eq!(roving_index("Tab", Some(1), 4), None);
        assert_eq!(roving_index("ArrowDown", None, 0), None);
    }
}
