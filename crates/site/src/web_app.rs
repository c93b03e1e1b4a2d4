use desktop_app_contract::AppMountContext;
use desktop_runtime::{
    apps::render_window_contents, use_desktop_runtime, AppId, DesktopProvider, DesktopShell,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Terminal OS" />
        <Meta name="description" content="A desktop-style personal portfolio with papers, links and projects." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/papers" view=|| view! { <StandaloneEntry app_id=AppId::Papers /> } />
                    <Route path="/links" view=|| view! { <StandaloneEntry app_id=AppId::Links /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Renders one content app as a full page, outside the window manager.
#[component]
pub fn StandaloneEntry(app_id: AppId) -> impl IntoView {
    view! {
        <DesktopProvider>
            <StandalonePage app_id />
        </DesktopProvider>
    }
}

#[component]
fn StandalonePage(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = render_window_contents(
        app_id,
        AppMountContext {
            window_id: app_id.as_str().to_string(),
            services: runtime.services.get_value(),
        },
    );

    view! {
        <section class="standalone-page" data-app=app_id.as_str()>
            <header class="standalone-header">
                <h1>{app_id.title()}</h1>
                <A href="/">"Open the desktop"</A>
            </header>
            {contents}
        </section>
    }
}
