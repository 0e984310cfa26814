//! Test double for [`ApiClient`].

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use super::{ApiClient, ApiRequest, ApiResponse, ApiResult};

/// Records every request and answers with a canned response.
pub(crate) struct RecordingClient {
    requests: Mutex<Vec<ApiRequest>>,
    response: ApiResponse,
}

impl RecordingClient {
    pub(crate) fn new(status: u16, body: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: ApiResponse::new(status, body),
        }
    }

    pub(crate) fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ApiClient for RecordingClient {
    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}
