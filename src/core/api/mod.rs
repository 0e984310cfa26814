//! Upstream API client.
//!
//! This module is the only place that talks to the VPS provider's REST API.
//! It knows nothing about tools: it takes an [`ApiRequest`], performs exactly
//! one HTTP call and hands back the status code together with the decoded
//! JSON body.
//!
//! - `request.rs` - Request/response shapes shared with the tools domain
//! - `client.rs` - The [`ApiClient`] seam and its reqwest implementation
//! - `error.rs` - Client error types

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, HttpApiClient};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, ApiResponse, HttpMethod};
