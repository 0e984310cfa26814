//! Request and response shapes for a single upstream call.

use serde_json::Value;
use std::fmt;

/// HTTP methods used by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Whether calls with this method only read upstream state.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Get)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound call against the upstream API.
///
/// `path` is appended verbatim to the configured base URL and may already
/// carry a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without a body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status code and decoded body of an upstream response.
///
/// `body` is [`Value::Null`] when the payload was empty or not valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Decode a raw payload, falling back to `null` when it is not JSON.
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        let body = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        Self { status, body }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_bytes_decodes_json() {
        let response = ApiResponse::from_bytes(200, br#"{"id": 7, "tags": ["a"]}"#);
        assert_eq!(response.body, json!({"id": 7, "tags": ["a"]}));
        assert!(response.is_success());
    }

    #[test]
    fn test_from_bytes_empty_is_null() {
        let response = ApiResponse::from_bytes(204, b"");
        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn test_from_bytes_garbage_is_null() {
        let response = ApiResponse::from_bytes(502, b"<html>Bad Gateway</html>");
        assert_eq!(response.body, Value::Null);
        assert!(!response.is_success());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
        assert!(HttpMethod::Get.is_read_only());
        assert!(!HttpMethod::Delete.is_read_only());
    }
}
