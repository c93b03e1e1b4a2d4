//! Shared UI primitive library for the desktop shell and the content apps.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the desktop stylesheet. Apps compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonSize, ButtonVariant, DataState, DataStatus, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, LauncherMenu, ListSurface, Pane,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, TextField, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, DataState, DataStatus, ListSurface, Pane,
        TextField,
    };
}
