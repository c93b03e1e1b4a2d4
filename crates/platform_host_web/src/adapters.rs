use platform_host::{
    ContentConfig, ContentError, ContentFuture, ContentSource, LinkRecord, Paper,
    UnconfiguredContentSource,
};

use crate::{HostedContentSource, WebPrefsStore};

/// Adapter enum that erases the concrete content backend behind [`ContentSource`].
#[derive(Debug, Clone)]
pub enum ContentSourceAdapter {
    /// Hosted database client built from compile-time credentials.
    Hosted(HostedContentSource),
    /// Fallback used when credentials are missing; every query fails with
    /// [`ContentError::MissingCredentials`].
    Unconfigured(UnconfiguredContentSource),
}

impl ContentSourceAdapter {
    /// Returns `true` when no credentials were configured at build time.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Self::Unconfigured(_))
    }
}

impl ContentSource for ContentSourceAdapter {
    fn list_papers(&self) -> ContentFuture<'_, Result<Vec<Paper>, ContentError>> {
        match self {
            Self::Hosted(source) => source.list_papers(),
            Self::Unconfigured(source) => source.list_papers(),
        }
    }

    fn list_links(&self) -> ContentFuture<'_, Result<Vec<LinkRecord>, ContentError>> {
        match self {
            Self::Hosted(source) => source.list_links(),
            Self::Unconfigured(source) => source.list_links(),
        }
    }
}

/// Builds the content source adapter for `config`.
pub fn content_source_for(config: Option<ContentConfig>) -> ContentSourceAdapter {
    match config {
        Some(config) => ContentSourceAdapter::Hosted(HostedContentSource::new(config)),
        None => ContentSourceAdapter::Unconfigured(UnconfiguredContentSource),
    }
}

/// Builds the content source adapter from build-time credentials.
pub fn content_source() -> ContentSourceAdapter {
    content_source_for(ContentConfig::from_build_env())
}

/// Builds the preference store used for layout and theme persistence.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}
