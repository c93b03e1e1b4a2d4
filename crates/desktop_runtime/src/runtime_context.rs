//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the service
//! bundle handed to apps, and boot hydration. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices};
use leptos::*;
use platform_host::{Theme, WallpaperId};

use crate::{
    effect_executor,
    host::{apply_document_theme, DesktopHostContext},
    model::{DesktopState, InteractionState, Viewport},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Last measured viewport; refreshed by [`Self::measure_viewport`].
    pub viewport: RwSignal<Viewport>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Services injected into mounted apps.
    pub services: StoredValue<AppServices>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Measures the browser viewport and records it in [`Self::viewport`] when it changed.
    pub fn measure_viewport(&self) -> Viewport {
        let measured = self.host.with_value(DesktopHostContext::viewport);
        if self.viewport.get_untracked() != measured {
            self.viewport.set(measured);
        }
        measured
    }

    /// Whether the last measured viewport is below the compact width.
    pub fn is_compact(&self) -> bool {
        self.viewport.with(|viewport| viewport.is_compact())
    }
}

fn app_command_action(command: AppCommand) -> DesktopAction {
    match command {
        AppCommand::SetWallpaper(wallpaper) => DesktopAction::SetWallpaper { wallpaper },
        AppCommand::ToggleTheme => DesktopAction::ToggleTheme,
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and restores persisted state.
pub fn DesktopProvider(
    /// Host services; defaults to the browser adapters.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let viewport = create_rw_signal(host.with_value(DesktopHostContext::viewport));

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let wallpaper: Signal<WallpaperId> =
        Signal::derive(move || state.with(|desktop| desktop.preferences.wallpaper));
    let theme: Signal<Theme> = Signal::derive(move || state.with(|desktop| desktop.theme));
    let services = store_value(AppServices::new(
        Callback::new(move |command| dispatch.call(app_command_action(command))),
        wallpaper,
        theme,
        host.with_value(DesktopHostContext::content_source),
    ));

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        viewport,
        effects,
        services,
        dispatch,
    };
    provide_context(runtime);

    effect_executor::install(runtime);
    create_effect(move |_| apply_document_theme(theme.get()));
    let snapshot = host.with_value(DesktopHostContext::load_boot_snapshot);
    runtime.dispatch_action(DesktopAction::HydrateSnapshot { snapshot });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
