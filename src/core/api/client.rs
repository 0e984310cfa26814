//! HTTP client for the upstream VPS API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing::{debug, instrument};

use super::{ApiError, ApiRequest, ApiResponse, ApiResult};
use crate::core::config::ApiConfig;

/// Header carrying the account API key.
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Executes single requests against the upstream API.
///
/// Implementations perform exactly one network call per `send` and never
/// interpret the response body. Retry or caching policies belong in a
/// wrapper implementing this same trait.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Send the request and return the status code with the decoded body.
    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse>;
}

/// [`ApiClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Build a client from the API configuration.
    ///
    /// The API key and `Accept: application/json` are installed as default
    /// headers so every request carries them.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url_for(&request.path);

        let mut builder = self.http.request(request.method.to_reqwest(), &url);
        if let Some(body) = &request.body {
            // Sets Content-Type: application/json
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let decoded = ApiResponse::from_bytes(status, &bytes);
        if decoded.body.is_null() && !bytes.is_empty() {
            debug!(status, len = bytes.len(), "Upstream body is not JSON, using null");
        }
        debug!(status, "Upstream responded");

        Ok(decoded)
    }
}
