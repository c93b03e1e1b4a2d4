//! Shared contract types between the desktop window manager runtime and the content apps.
//!
//! Apps never touch the runtime store directly. They receive an [`AppServices`] bundle carrying
//! the read-only content source and an appearance service that reads the current wallpaper/theme
//! and sends [`AppCommand`]s back to the runtime. [`CollectionLoad`] is the shared load status
//! for apps that list a content collection.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{rc::Rc, sync::Once};

use leptos::{logging, Callable, Callback, Signal};
use platform_host::{ContentCollection, ContentError, ContentSource, Theme, WallpaperId};
use serde::{Deserialize, Serialize};

static MISSING_CREDENTIALS_WARNING: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Requests an app can send to the desktop runtime.
pub enum AppCommand {
    /// Switch the desktop wallpaper preset.
    SetWallpaper(WallpaperId),
    /// Flip between light and dark themes.
    ToggleTheme,
}

#[derive(Clone, Copy)]
/// Reads and changes the shell wallpaper/theme.
pub struct AppearanceService {
    sender: Callback<AppCommand>,
    /// Current wallpaper preset.
    pub wallpaper: Signal<WallpaperId>,
    /// Current theme.
    pub theme: Signal<Theme>,
}

impl AppearanceService {
    /// Requests a wallpaper change.
    pub fn set_wallpaper(&self, wallpaper: WallpaperId) {
        self.sender.call(AppCommand::SetWallpaper(wallpaper));
    }

    /// Requests a theme flip.
    pub fn toggle_theme(&self) {
        self.sender.call(AppCommand::ToggleTheme);
    }
}

#[derive(Clone)]
/// Service bundle injected into every mounted app.
pub struct AppServices {
    /// Read-only papers/links collaborator.
    pub content: Rc<dyn ContentSource>,
    /// Wallpaper and theme controls.
    pub appearance: AppearanceService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and preference signals.
    pub fn new(
        sender: Callback<AppCommand>,
        wallpaper: Signal<WallpaperId>,
        theme: Signal<Theme>,
        content: Rc<dyn ContentSource>,
    ) -> Self {
        Self {
            content,
            appearance: AppearanceService {
                sender,
                wallpaper,
                theme,
            },
        }
    }
}

#[derive(Clone)]
/// Mount context passed to an app view inside a managed window.
pub struct AppMountContext {
    /// Runtime window id (`<appId>-<n>`), or the route name for standalone pages.
    pub window_id: String,
    /// Runtime service bundle.
    pub services: AppServices,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Load status of a content collection inside an app.
pub enum CollectionLoad<T> {
    /// The fetch is in flight.
    Loading,
    /// The fetch failed; carries the user-facing message.
    Failed(String),
    /// Every record, newest first.
    Ready(Vec<T>),
}

impl<T> CollectionLoad<T> {
    /// Converts a finished fetch into a load status, logging failures.
    ///
    /// Missing credentials are logged once per page; query failures are logged with detail
    /// every time while the returned message stays generic.
    pub fn settle(collection: ContentCollection, result: Result<Vec<T>, ContentError>) -> Self {
        match result {
            Ok(rows) => Self::Ready(rows),
            Err(err) => {
                match &err {
                    ContentError::MissingCredentials => MISSING_CREDENTIALS_WARNING.call_once(|| {
                        logging::warn!(
                            "content database is not configured; set PORTFOLIO_DB_URL and PORTFOLIO_DB_ANON_KEY at build time"
                        );
                    }),
                    _ => logging::error!("error loading {}: {err}", collection.label()),
                }
                Self::Failed(err.user_message(collection))
            }
        }
    }
}
