//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the browser-side host services used by the desktop runtime:
//! `localStorage` preferences, the hosted content database client, and viewport probes.
//! Every adapter compiles natively with inert fallbacks so runtime tests can link it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod content;
pub mod storage;
pub mod viewport;

pub use adapters::{content_source, content_source_for, prefs_store, ContentSourceAdapter};
pub use content::hosted::HostedContentSource;
pub use storage::local_prefs::WebPrefsStore;
