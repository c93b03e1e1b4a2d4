use std::{future::Future, pin::Pin};

use thiserror::Error;

use super::records::{LinkRecord, Paper};

/// Object-safe boxed future used by [`ContentSource`] methods.
pub type ContentFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Read-only collections exposed by the content database.
pub enum ContentCollection {
    /// Research papers.
    Papers,
    /// Curated links.
    Links,
}

impl ContentCollection {
    /// Table name in the hosted database.
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Papers => "papers",
            Self::Links => "links",
        }
    }

    /// Plural noun used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Papers => "papers",
            Self::Links => "links",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure while loading a content collection.
pub enum ContentError {
    /// The database URL or key was not configured at build time.
    #[error("content database credentials are not configured")]
    MissingCredentials,
    /// The request could not be sent or the connection failed.
    #[error("request for {collection} failed: {detail}")]
    Request {
        /// Collection table name.
        collection: &'static str,
        /// Transport error detail.
        detail: String,
    },
    /// The database answered with a non-success status.
    #[error("request for {collection} returned status {status}: {detail}")]
    Status {
        /// Collection table name.
        collection: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body, when readable.
        detail: String,
    },
    /// The response body was not a valid record list.
    #[error("could not decode {collection}: {detail}")]
    Decode {
        /// Collection table name.
        collection: &'static str,
        /// Decoder error detail.
        detail: String,
    },
}

impl ContentError {
    /// Generic message shown in place of the collection. Never carries request detail.
    pub fn user_message(&self, collection: ContentCollection) -> String {
        match self {
            Self::MissingCredentials => "Supabase environment variables are missing.".to_string(),
            Self::Request { .. } | Self::Status { .. } | Self::Decode { .. } => format!(
                "Unable to load {} right now. Please try again later.",
                collection.label()
            ),
        }
    }
}

/// Read-only access to the portfolio content collections.
///
/// Implementations return every record ordered by `date` descending.
pub trait ContentSource {
    /// Lists every paper.
    fn list_papers(&self) -> ContentFuture<'_, Result<Vec<Paper>, ContentError>>;

    /// Lists every link.
    fn list_links(&self) -> ContentFuture<'_, Result<Vec<LinkRecord>, ContentError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Source used when no database credentials are configured.
pub struct UnconfiguredContentSource;

impl ContentSource for UnconfiguredContentSource {
    fn list_papers(&self) -> ContentFuture<'_, Result<Vec<Paper>, ContentError>> {
        Box::pin(async { Err(ContentError::MissingCredentials) })
    }

    fn list_links(&self) -> ContentFuture<'_, Result<Vec<LinkRecord>, ContentError>> {
        Box::pin(async { Err(ContentError::MissingCredentials) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory content source for tests and offline previews.
pub struct MemoryContentSource {
    papers: Vec<Paper>,
    links: Vec<LinkRecord>,
}

impl MemoryContentSource {
    /// Creates a source holding `papers` and `links`.
    pub fn new(papers: Vec<Paper>, links: Vec<LinkRecord>) -> Self {
        Self { papers, links }
    }
}

// Missing dates sort last, matching `order=date.desc` on the hosted database.
fn newest_first<T: Clone>(records: &[T], date: impl Fn(&T) -> Option<&str>) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| date(b).cmp(&date(a)));
    sorted
}

impl ContentSource for MemoryContentSource {
    fn list_papers(&self) -> ContentFuture<'_, Result<Vec<Paper>, ContentError>> {
        Box::pin(async move { Ok(newest_first(&self.papers, |p| p.date.as_deref())) })
    }

    fn list_links(&self) -> ContentFuture<'_, Result<Vec<LinkRecord>, ContentError>> {
        Box::pin(async move { Ok(newest_first(&self.links, |l| l.date.as_deref())) })
    }
}
