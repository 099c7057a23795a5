//! Error types and handling module.
//!
//! Defines the error taxonomy for the DexPaprika proxy and the conversion
//! into MCP protocol errors.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
///
/// Every failure is logged once at the point of detection and then
/// propagated to the MCP host unchanged; there is no retry or fallback.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing caller arguments, detected before any network call.
    #[error("Invalid parameters: {0}")]
    Validation(String),

    /// HTTP 410: the endpoint was permanently removed upstream.
    ///
    /// The message steers automated callers toward the network-scoped
    /// endpoints that replaced the removed global ones.
    #[error(
        "This endpoint has been permanently removed. Use network-scoped endpoints instead, \
         for example /networks/{{network}}/pools rather than /pools. Call get_networks first \
         to see the available networks."
    )]
    EndpointRemoved,

    /// HTTP 429: the free-tier request quota is exhausted.
    #[error(
        "Rate limit exceeded. You have reached the maximum number of requests allowed for \
         the free tier. To increase your rate limits, consider upgrading to a paid plan at \
         https://docs.dexpaprika.com/"
    )]
    RateLimited,

    /// Any other non-2xx HTTP status.
    #[error("API request failed with status {status}")]
    RequestFailed { status: u16 },

    /// Connectivity failure or a response body that is not valid JSON.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<ApiError> for McpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(_) => McpError::invalid_params(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
