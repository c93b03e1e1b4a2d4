pub mod apps;
pub mod components;
mod effect_executor;
pub mod focus_trap;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use geometry::clamp_rect;
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_boot_snapshot, persist_state, persist_theme, PersistenceError};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
