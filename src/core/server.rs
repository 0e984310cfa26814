//! MCP Server implementation and lifecycle management.
//!
//! The server owns one [`ToolRegistry`] holding the upstream client. The
//! STDIO/TCP transports reach it through the rmcp `ToolRouter`; the HTTP
//! transport calls [`McpServer::call_tool`], which dispatches through the
//! same registry.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::api::{ApiClient, HttpApiClient};
use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Manages VPS hosting services through the provider's REST API: \
account and balance, service lifecycle (start, stop, restart, cancel), settings, \
OS reinstall, plans and billing, ordering, backups, SSH and API keys, and history. \
Every tool returns the upstream JSON response unchanged. Tools annotated as \
destructive cannot be undone.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool table and upstream client.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server talking to the upstream API described by `config.api`.
    pub fn new(config: Config) -> CoreResult<Self> {
        let client = HttpApiClient::new(&config.api)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a server dispatching through an arbitrary client.
    pub fn with_client(config: Config, client: Arc<dyn ApiClient>) -> Self {
        let registry = Arc::new(ToolRegistry::new(client));
        info!("Registered {} tools", registry.tool_names().len());

        Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Server instructions advertised during initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::RecordingClient;
    use crate::core::config::ApiConfig;
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::with_client(
            Config::default(),
            Arc::new(RecordingClient::ok(json!({"ok": true}))),
        )
    }

    #[test]
    fn test_server_creation() {
        let server = test_server();
        assert_eq!(server.name(), "vps-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_new_builds_http_client() {
        let mut config = Config::default();
        config.api = ApiConfig::new("http://127.0.0.1:9", "secret");
        assert!(McpServer::new(config).is_ok());
    }

    #[test]
    fn test_new_rejects_unusable_api_key() {
        let mut config = Config::default();
        config.api = ApiConfig::new("http://127.0.0.1:9", "bad\nkey");
        let result = McpServer::new(config);
        assert!(matches!(
            result,
            Err(crate::core::Error::Api(crate::core::ApiError::InvalidApiKey(_)))
        ));
    }

    #[test]
    fn test_get_info_enables_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "vps-mcp-server");
        assert!(info.instructions.unwrap().contains("VPS"));
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 49);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_dispatches_to_registry() {
        let client = Arc::new(RecordingClient::ok(json!({"balance": 12.5})));
        let server = McpServer::with_client(Config::default(), client.clone());

        let result = server.call_tool("get_balance", json!({})).await.unwrap();
        assert_eq!(result["isError"], json!(false));
        assert_eq!(client.requests().len(), 1);
    }
}
