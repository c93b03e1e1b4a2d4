//! Projects desktop app.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use system_ui::Pane;

#[component]
/// Projects window contents.
pub fn ProjectsApp() -> impl IntoView {
    view! {
        <Pane layout_class="app-static" aria_label="Projects">
            <p>
                "Project write-ups live inside this window. The old standalone projects page is "
                "retired, so the desktop is the single place to find them."
            </p>
            <p>
                "Next up: a curated list of current builds with short context and live demos, "
                "backed by the content database so projects share the search used by Papers and Links."
            </p>
            <p class="app-section-note">"Planned: filter by status (shipping, in progress, archived) and stack."</p>
        </Pane>
    }
}
