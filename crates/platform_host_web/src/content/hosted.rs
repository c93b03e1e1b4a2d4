//! PostgREST-style client for the read-only `papers` and `links` collections.

use platform_host::{
    ContentCollection, ContentConfig, ContentError, ContentFuture, ContentSource, LinkRecord,
    Paper,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
/// Content source backed by the hosted database REST endpoint.
pub struct HostedContentSource {
    config: ContentConfig,
}

impl HostedContentSource {
    /// Creates a client for `config`.
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    /// Connection settings used by this client.
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: ContentCollection,
    ) -> Result<Vec<T>, ContentError> {
        let url = self.config.collection_url(collection);
        let body = fetch_text(&url, self.config.anon_key(), collection).await?;
        decode_collection(collection, &body)
    }
}

impl ContentSource for HostedContentSource {
    fn list_papers(&self) -> ContentFuture<'_, Result<Vec<Paper>, ContentError>> {
        Box::pin(self.fetch_collection(ContentCollection::Papers))
    }

    fn list_links(&self) -> ContentFuture<'_, Result<Vec<LinkRecord>, ContentError>> {
        Box::pin(self.fetch_collection(ContentCollection::Links))
    }
}

/// Decodes a JSON array response into records of `collection`.
pub fn decode_collection<T: DeserializeOwned>(
    collection: ContentCollection,
    body: &str,
) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(body).map_err(|err| ContentError::Decode {
        collection: collection.table_name(),
        detail: err.to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(
    url: &str,
    anon_key: &str,
    collection: ContentCollection,
) -> Result<String, ContentError> {
    use gloo_net::http::Request;

    let response = Request::get(url)
        .header("apikey", anon_key)
        .header("Authorization", &format!("Bearer {anon_key}"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| ContentError::Request {
            collection: collection.table_name(),
            detail: err.to_string(),
        })?;

    if !response.ok() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(ContentError::Status {
            collection: collection.table_name(),
            status,
            detail,
        });
    }

    response.text().await.map_err(|err| ContentError::Request {
        collection: collection.table_name(),
        detail: err.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(
    url: &str,
    _anon_key: &str,
    collection: ContentCollection,
) -> Result<String, ContentError> {
    Err(ContentError::Request {
        collection: collection.table_name(),
        detail: format!("no HTTP transport on this target for {url}"),
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_rows_and_reports_malformed_bodies() {
        let rows: Vec<LinkRecord> = decode_collection(
            ContentCollection::Links,
            r#"[{"id": 3, "title": "Rust", "url": "https://rust-lang.org", "date": "2024-01-02", "authors": null}]"#,
        )
        .expect("rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "3");

        let err = decode_collection::<Paper>(ContentCollection::Papers, "{\"message\":\"nope\"}")
            .expect_err("object is not a row list");
        assert!(matches!(
            err,
            ContentError::Decode {
                collection: "papers",
                ..
            }
        ));
    }

    #[test]
    fn native_build_reports_request_failure() {
        let config = ContentConfig::new("https://db.example", "anon").expect("config");
        let source = HostedContentSource::new(config);
        let err = block_on(source.list_papers()).expect_err("no transport natively");
        assert!(matches!(err, ContentError::Request { .. }));
    }
}
