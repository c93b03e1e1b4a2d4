//! Build-time configuration for the hosted content database.
//!
//! The browser bundle has no process environment, so credentials are baked in at compile time
//! from `PORTFOLIO_DB_URL` and `PORTFOLIO_DB_ANON_KEY`. Missing values are not an error here;
//! content apps render a labeled error state instead.

use crate::content::ContentCollection;

/// Compile-time variable holding the hosted database base URL.
pub const CONTENT_DB_URL_VAR: &str = "PORTFOLIO_DB_URL";
/// Compile-time variable holding the public (anon) API key.
pub const CONTENT_DB_KEY_VAR: &str = "PORTFOLIO_DB_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Connection settings for the read-only content database.
pub struct ContentConfig {
    base_url: String,
    anon_key: String,
}

impl ContentConfig {
    /// Builds a config, returning `None` when either value is blank.
    pub fn new(base_url: impl AsRef<str>, anon_key: impl AsRef<str>) -> Option<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/');
        let anon_key = anon_key.as_ref().trim();
        if base_url.is_empty() || anon_key.is_empty() {
            return None;
        }
        Some(Self {
            base_url: base_url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Reads the config captured at build time.
    pub fn from_build_env() -> Option<Self> {
        Self::new(
            option_env!("PORTFOLIO_DB_URL").unwrap_or_default(),
            option_env!("PORTFOLIO_DB_ANON_KEY").unwrap_or_default(),
        )
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public API key sent with every request.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// REST endpoint returning every record of `collection`, newest first.
    pub fn collection_url(&self, collection: ContentCollection) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=date.desc",
            self.base_url,
            collection.table_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_values_disable_the_config() {
        assert_eq!(ContentConfig::new("", "key"), None);
        assert_eq!(ContentConfig::new("https://db.example", "   "), None);
    }

    #[test]
    fn collection_url_strips_trailing_slash_and_orders_by_date() {
        let config = ContentConfig::new(" https://db.example/ ", "anon").expect("config");
        assert_eq!(config.base_url(), "https://db.example");
        assert_eq!(
            config.collection_url(ContentCollection::Papers),
            "https://db.example/rest/v1/papers?select=*&order=date.desc"
        );
        assert_eq!(
            config.collection_url(ContentCollection::Links),
            "https://db.example/rest/v1/links?select=*&order=date.desc"
        );
    }
}
