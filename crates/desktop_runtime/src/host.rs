//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Storage and content services are injected as trait objects so tests can run the shell
//! against in-memory adapters.

use std::rc::Rc;

use leptos::{logging, SignalGetUntracked};
use platform_host::{ContentSource, PrefsStore, Theme};
use platform_host_web::{content_source, prefs_store, viewport};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{BootSnapshot, Viewport, WindowId},
    persistence,
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// DOM id of the frame element for `window_id`.
pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("window-{window_id}")
}

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    content: Rc<dyn ContentSource>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()), Rc::new(content_source()))
    }
}

impl DesktopHostContext {
    /// Creates a host bundle from explicit services.
    pub fn new(prefs: Rc<dyn PrefsStore>, content: Rc<dyn ContentSource>) -> Self {
        Self { prefs, content }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        Rc::clone(&self.prefs)
    }

    /// Returns the configured content source.
    pub fn content_source(&self) -> Rc<dyn ContentSource> {
        Rc::clone(&self.content)
    }

    /// Current browser viewport, or [`Viewport::FALLBACK`] off-browser.
    pub fn viewport(&self) -> Viewport {
        viewport::inner_size()
            .map(|(width, height)| Viewport::new(width, height))
            .unwrap_or(Viewport::FALLBACK)
    }

    /// Whether the primary pointer is touch-like.
    pub fn prefers_coarse_pointer(&self) -> bool {
        viewport::prefers_coarse_pointer()
    }

    /// Reads the stored layout for the current viewport.
    pub fn load_boot_snapshot(&self) -> BootSnapshot {
        persistence::load_boot_snapshot(self.prefs.as_ref(), self.viewport())
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistState => {
                let state = runtime.state.get_untracked();
                if let Err(err) = persistence::persist_state(self.prefs.as_ref(), &state) {
                    logging::warn!("persist desktop state failed: {err}");
                }
            }
            RuntimeEffect::PersistTheme => {
                let theme = runtime.state.get_untracked().theme;
                if let Err(err) = persistence::persist_theme(self.prefs.as_ref(), theme) {
                    logging::warn!("persist theme failed: {err}");
                }
            }
            RuntimeEffect::FocusWindow(window_id) => focus_window_frame(&window_id),
        }
    }
}

/// Focuses a window frame on the next tick, once the frame has rendered.
pub fn focus_window_frame(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_dom_id(window_id);
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                crate::focus_trap::focus_without_scroll(&element);
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Mirrors `theme` onto the document root as a `light`/`dark` class and `color-scheme`.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().as_str());
        let _ = classes.add_1(theme.as_str());
        if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
            let _ = root.style().set_property("color-scheme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryPrefsStore, UnconfiguredContentSource};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::STATE_STORAGE_KEY;

    #[test]
    fn native_host_uses_fallback_viewport() {
        let host = DesktopHostContext::new(
            Rc::new(MemoryPrefsStore::default()),
            Rc::new(UnconfiguredContentSource),
        );
        assert_eq!(host.viewport(), Viewport::FALLBACK);
        assert!(!host.prefers_coarse_pointer());
    }

    #[test]
    fn boot_snapshot_reads_injected_store() {
        let store = MemoryPrefsStore::with_entries([(
            STATE_STORAGE_KEY,
            r#"{"version":2,"windows":[{"id":"projects-3","appId":"projects","x":96,"y":96,"width":600,"height":420,"z":4,"minimized":false}],"preferences":{"wallpaper":"matrix"}}"#,
        )]);
        let host = DesktopHostContext::new(Rc::new(store), Rc::new(UnconfiguredContentSource));

        let snapshot = host.load_boot_snapshot();
        assert_eq!(snapshot.windows.len(), 1);
        assert_eq!(snapshot.windows[0].z_index, 1);
        assert_eq!(snapshot.window_counter, 3);
    }

    #[test]
    fn window_dom_ids_are_prefixed() {
        assert_eq!(
            window_dom_id(&WindowId("links-2".to_string())),
            "window-links-2"
        );
    }
}
