//! DexPaprika HTTP gateway.
//!
//! Translates a logical request (path segments plus query parameters) into a
//! single outbound GET against the fixed DexPaprika base URL and classifies
//! the outcome. The response body is opaque to this layer: a 2xx body is
//! parsed as JSON and returned unchanged.

use serde_json::Value;
use url::Url;

use crate::error::{ApiError, Result};

/// Base URL for the DexPaprika API. Fixed; there is no runtime override.
pub const API_BASE_URL: &str = "https://api.dexpaprika.com";

/// HTTP gateway to the DexPaprika API.
///
/// Stateless apart from the connection pool inside [`reqwest::Client`];
/// cloning shares that pool. Exactly one attempt is made per request, with
/// no retries and no timeout of its own.
#[derive(Clone)]
pub struct DexPaprikaClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DexPaprikaClient {
    /// Create a client against the fixed DexPaprika base URL.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against a caller-supplied base URL.
    ///
    /// Production code always uses [`DexPaprikaClient::new`]; this exists so
    /// tests can point the gateway at a local stub server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Validation(format!("Invalid base URL: {}", base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Validation(format!("Invalid base URL: {}", base_url)));
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch a resource, returning the parsed JSON body.
    ///
    /// `segments` are joined onto the base path with percent-encoding
    /// applied to each one, so caller-supplied identifiers (network ids,
    /// pool and token addresses) survive reserved characters. `query` pairs
    /// are appended with their values encoded the same way; an empty slice
    /// produces a URL without a query string.
    ///
    /// Failures are classified per HTTP status (410 and 429 carry guidance
    /// text for the calling assistant) and logged once before returning.
    pub async fn fetch(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Value> {
        let url = self.endpoint_url(segments, query)?;
        tracing::debug!(url = %url, "Fetching from DexPaprika API");

        match self.request(url.clone()).await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::error!(path = %url.path(), error = %err, "DexPaprika API request failed");
                Err(err)
            }
        }
    }

    /// Build the request URL from path segments and query pairs.
    fn endpoint_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Validation("Base URL cannot carry path segments".to_string()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue the GET and classify the response status.
    async fn request(&self, url: Url) -> Result<Value> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                410 => ApiError::EndpointRemoved,
                429 => ApiError::RateLimited,
                code => ApiError::RequestFailed { status: code },
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DexPaprikaClient {
        DexPaprikaClient::new().expect("default client")
    }

    #[test]
    fn test_endpoint_url_without_query() {
        let url = client().endpoint_url(&["networks"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.dexpaprika.com/networks");
    }

    #[test]
    fn test_endpoint_url_with_query() {
        let url = client()
            .endpoint_url(
                &["networks", "ethereum", "dexes"],
                &[("page", "0".to_string()), ("limit", "10".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dexpaprika.com/networks/ethereum/dexes?page=0&limit=10"
        );
    }

    #[test]
    fn test_endpoint_url_encodes_path_segments() {
        let url = client().endpoint_url(&["networks", "ethereum", "pools", "ab/cd?e"], &[]).unwrap();

        // The reserved characters must not split the segment or start a query.
        assert_eq!(url.path(), "/networks/ethereum/pools/ab%2Fcd%3Fe");
        assert_eq!(url.path_segments().unwrap().count(), 4);
        assert!(url.query().is_none());
    }

    #[test]
    fn test_endpoint_url_encodes_query_values() {
        let url = client()
            .endpoint_url(&["search"], &[("query", "uni swap/v3".to_string())])
            .unwrap();

        // url's own decoder must round-trip to the original value.
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "uni swap/v3");
        assert!(!url.query().unwrap().contains('/'));
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        let result = DexPaprikaClient::with_base_url("not a url");
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_with_base_url_accepts_local_stub() {
        let client = DexPaprikaClient::with_base_url("http://127.0.0.1:9/").unwrap();
        let url = client.endpoint_url(&["stats"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9/stats");
    }
}
