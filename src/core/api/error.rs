//! Upstream client error types.

use thiserror::Error;

/// Result type for upstream client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while talking to the upstream API.
///
/// Non-success HTTP statuses are not errors at this layer; they come back
/// as a regular [`super::ApiResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured API key cannot be used as a header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Network-level failure (connection refused, DNS, timeout, broken body).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Create a transport error for the given URL.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Whether the failure happened because the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}
