//! Read-only content collaborator: papers and links collections.
//!
//! Records are fetched in full (newest first) and filtered client-side. Sources never mutate
//! the hosted collections.

mod records;
mod search;
mod source;

pub use records::{format_record_date, LinkRecord, Paper};
pub use search::{filter_records, SearchFields};
pub use source::{
    ContentCollection, ContentError, ContentFuture, ContentSource, MemoryContentSource,
    UnconfiguredContentSource,
};
