//! About Me desktop app.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use system_ui::Pane;

#[component]
/// About Me window contents.
pub fn AboutApp() -> impl IntoView {
    view! {
        <Pane layout_class="app-static" aria_label="About me">
            <h2 class="app-section-title">"Hi, I build software and study machine learning on the side."</h2>
            <p>
                "This desktop is the main way to browse my work. Every window reads from the same "
                "content database that used to back separate site pages."
            </p>
            <p>
                "Open Papers, Links, and Projects from the Start menu or the desktop icons. "
                "Window layouts are saved in this browser, so arrange the workspace however you like."
            </p>
            <p class="app-section-note">"Tip: the Start menu closes with Escape."</p>
        </Pane>
    }
}
