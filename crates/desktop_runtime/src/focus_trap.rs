//! Tab containment for the active window.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Elements that can take keyboard focus inside a window body.
pub const FOCUSABLE_SELECTOR: &str =
    r#"a[href], button, textarea, input, select, [tabindex]:not([tabindex="-1"])"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the focus trap sends focus for one Tab keypress.
pub enum TabTarget {
    /// Let the browser move focus normally.
    Browser,
    /// Prevent the default move and focus the window container.
    Container,
    /// Prevent the default move and focus the focusable at this index.
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What currently holds focus, relative to the window.
pub enum FocusedAt {
    /// The window container itself.
    Container,
    /// The focusable at this index.
    Item(usize),
    /// Something else (or nothing).
    Elsewhere,
}

/// Decides how a Tab (or Shift+Tab) keypress moves focus among `count` focusables.
pub fn tab_target(count: usize, focused: FocusedAt, shift: bool) -> TabTarget {
    if count == 0 {
        return TabTarget::Container;
    }
    let last = count - 1;
    match (shift, focused) {
        (true, FocusedAt::Item(0) | FocusedAt::Container) => TabTarget::Item(last),
        (false, FocusedAt::Item(index)) if index == last => TabTarget::Item(0),
        _ => TabTarget::Browser,
    }
}

/// Focuses `element` without scrolling the page.
#[cfg(target_arch = "wasm32")]
pub fn focus_without_scroll(element: &web_sys::HtmlElement) {
    let options = web_sys::FocusOptions::new();
    options.set_prevent_scroll(true);
    let _ = element.focus_with_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_without_scroll(_: &web_sys::HtmlElement) {}

#[cfg(target_arch = "wasm32")]
fn focusables(container: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|element| !element.has_attribute("disabled") && element.tab_index() != -1)
        .collect()
}

/// Keeps Tab focus cycling inside `container`.
///
/// Callers invoke this only for the active window.
#[cfg(target_arch = "wasm32")]
pub fn trap_tab_key(container: &web_sys::HtmlElement, ev: &web_sys::KeyboardEvent) {
    if ev.key() != "Tab" {
        return;
    }
    let items = focusables(container);
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    let focused = match active {
        Some(active) if active.is_same_node(Some(container.as_ref())) => FocusedAt::Container,
        Some(active) => items
            .iter()
            .position(|item| item.is_same_node(Some(active.as_ref())))
            .map_or(FocusedAt::Elsewhere, FocusedAt::Item),
        None => FocusedAt::Elsewhere,
    };

    match tab_target(items.len(), focused, ev.shift_key()) {
        TabTarget::Browser => {}
        TabTarget::Container => {
            ev.prevent_default();
            focus_without_scroll(container);
        }
        TabTarget::Item(index) => {
            ev.prevent_default();
            let _ = items[index].focus();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trap_tab_key(_: &web_sys::HtmlElement, _: &web_sys::KeyboardEvent) {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_windows_keep_focus_on_the_container() {
        assert_eq!(tab_target(0, FocusedAt::Elsewhere, false), TabTarget::Container);
        assert_eq!(tab_target(0, FocusedAt::Container, true), TabTarget::Container);
    }

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(tab_target(3, FocusedAt::Item(2), false), TabTarget::Item(0));
        assert_eq!(tab_target(3, FocusedAt::Item(1), false), TabTarget::Browser);
    }

    #[test]
    fn shift_tab_wraps_from_first_or_container_to_last() {
        assert_eq!(tab_target(3, FocusedAt::Item(0), true), TabTarget::Item(2));
        assert_eq!(tab_target(3, FocusedAt::Container, true), TabTarget::Item(2));
        assert_eq!(tab_target(3, FocusedAt::Item(2), true), TabTarget::Browser);
    }

    #[test]
    fn single_focusable_cycles_onto_itself() {
        assert_eq!(tab_target(1, FocusedAt::Item(0), false), TabTarget::Item(0));
        assert_eq!(tab_target(1, FocusedAt::Item(0), true), TabTarget::Item(0));
    }
}
