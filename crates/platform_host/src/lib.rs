//! Typed host-domain contracts and shared models used across the desktop runtime, content apps,
//! and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the key/value storage
//! contract used by layout persistence, the read-only content collaborator (papers and links),
//! build-time content configuration, and the wallpaper/theme presets shared by the shell and the
//! Settings app. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod content;
pub mod storage;
pub mod wallpaper;

pub use config::ContentConfig;
pub use content::{
    filter_records, format_record_date, ContentCollection, ContentError, ContentFuture,
    ContentSource, LinkRecord, MemoryContentSource, Paper, SearchFields,
    UnconfiguredContentSource,
};
pub use storage::prefs::{MemoryPrefsStore, PrefsStore};
pub use wallpaper::{accent_rgba, Theme, WallpaperId, WallpaperPreset, WALLPAPER_PRESETS};
