use super::records::{LinkRecord, Paper};

/// Record fields that participate in client-side search.
pub trait SearchFields {
    /// Returns `true` when any searchable field contains `needle`.
    ///
    /// `needle` is already trimmed and lowercased.
    fn matches_query(&self, needle: &str) -> bool;
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl SearchFields for Paper {
    fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.title, needle)
            || contains_folded(&self.authors, needle)
            || self
                .year
                .is_some_and(|year| year.to_string().contains(needle))
    }
}

impl SearchFields for LinkRecord {
    fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.title, needle)
            || self
                .authors
                .as_deref()
                .is_some_and(|authors| contains_folded(authors, needle))
            || contains_folded(&self.url, needle)
    }
}

/// Filters `records` by a case-insensitive substring `query`, preserving order.
///
/// A blank query returns every record.
pub fn filter_records<'a, T: SearchFields>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record.matches_query(&needle))
        .collect()
}
