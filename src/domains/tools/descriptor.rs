//! Declarative tool descriptors.
//!
//! Every tool is a unit struct implementing [`ApiTool`]: a typed parameter
//! struct (the input contract, exposed as JSON Schema) plus a pure mapping
//! onto one upstream `(method, path, body)` triple. [`ToolDescriptor::of`]
//! erases the type so the registry can hold all tools in one table.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::ToolError;
use crate::core::api::{ApiRequest, HttpMethod};

/// A violated input rule detected after deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentError(pub String);

impl ArgumentError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tool backed by exactly one upstream endpoint.
pub trait ApiTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// HTTP method of the upstream endpoint.
    const METHOD: HttpMethod;

    /// Typed input contract.
    ///
    /// Path fields are marked `#[serde(skip_serializing)]` so that the
    /// serialized struct is exactly the request body.
    type Params: DeserializeOwned + Serialize + JsonSchema + 'static;

    /// Build the request path (and query string) from the arguments.
    fn path(params: &Self::Params) -> Result<String, ArgumentError>;

    /// Structural checks serde cannot express, e.g. mutually exclusive fields.
    fn validate(_params: &Self::Params) -> Result<(), ArgumentError> {
        Ok(())
    }

    /// Request body. POST tools send their serialized parameters.
    fn body(params: &Self::Params) -> Result<Option<Value>, serde_json::Error> {
        match Self::METHOD {
            HttpMethod::Post => body_fields(params),
            HttpMethod::Get | HttpMethod::Delete => Ok(None),
        }
    }
}

/// Serialize parameters into a body, dropping it entirely when no field is set.
pub fn body_fields<P: Serialize>(params: &P) -> Result<Option<Value>, serde_json::Error> {
    match serde_json::to_value(params)? {
        Value::Object(map) if map.is_empty() => Ok(None),
        value => Ok(Some(value)),
    }
}

/// Type-erased [`ApiTool`].
#[derive(Clone)]
pub struct ToolDescriptor {
    name: &'static str,
    description: &'static str,
    method: HttpMethod,
    input_schema: Arc<JsonObject>,
    build: fn(JsonObject) -> Result<ApiRequest, ToolError>,
}

impl ToolDescriptor {
    /// Describe the tool `T`.
    pub fn of<T: ApiTool>() -> Self {
        Self {
            name: T::NAME,
            description: T::DESCRIPTION,
            method: T::METHOD,
            input_schema: Arc::new(schema_for_type::<T::Params>()),
            build: build_request::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn input_schema(&self) -> &Arc<JsonObject> {
        &self.input_schema
    }

    /// Validate the arguments and translate them into an upstream request.
    pub fn build_request(&self, arguments: JsonObject) -> Result<ApiRequest, ToolError> {
        (self.build)(arguments)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema.clone(),
            annotations: Some(annotations_for(self.method)),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

fn build_request<T: ApiTool>(arguments: JsonObject) -> Result<ApiRequest, ToolError> {
    let params: T::Params = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(T::NAME, e.to_string()))?;

    let invalid = |e: ArgumentError| ToolError::invalid_arguments(T::NAME, e.0);
    T::validate(&params).map_err(invalid)?;
    let path = T::path(&params).map_err(invalid)?;

    let mut request = ApiRequest::new(T::METHOD, path);
    let body = T::body(&params)
        .map_err(|e| ToolError::internal(format!("Failed to encode {} body: {}", T::NAME, e)))?;
    if let Some(body) = body {
        request = request.with_body(body);
    }

    Ok(request)
}

fn annotations_for(method: HttpMethod) -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(method.is_read_only()),
        destructive_hint: Some(method == HttpMethod::Delete),
        idempotent_hint: Some(method != HttpMethod::Post),
        open_world_hint: Some(true),
    }
}
