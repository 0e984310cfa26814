//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The table of all available tools (single source of truth)
//! - Validation and dispatch of tool calls to the upstream API
//! - Packaging of upstream responses as tool results

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::definitions::*;
use super::{ToolDescriptor, ToolError};
use crate::core::api::ApiClient;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the tool table and the upstream client.
///
/// The registry holds no mutable state, so one instance can serve any number
/// of concurrent calls.
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, ToolDescriptor>,
    client: Arc<dyn ApiClient>,
}

impl ToolRegistry {
    /// Create a registry dispatching through the given client.
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        let tools = Self::descriptors()
            .into_iter()
            .map(|descriptor| (descriptor.name(), descriptor))
            .collect();

        Self { tools, client }
    }

    /// The tool table.
    pub fn descriptors() -> Vec<ToolDescriptor> {
        vec![
            // Account
            ToolDescriptor::of::<GetAccountTool>(),
            ToolDescriptor::of::<GetProfileTool>(),
            ToolDescriptor::of::<GetBalanceTool>(),
            // Service lifecycle
            ToolDescriptor::of::<ListServicesTool>(),
            ToolDescriptor::of::<GetServiceTool>(),
            ToolDescriptor::of::<GetServiceStatusTool>(),
            ToolDescriptor::of::<StartServiceTool>(),
            ToolDescriptor::of::<StopServiceTool>(),
            ToolDescriptor::of::<RestartServiceTool>(),
            ToolDescriptor::of::<CancelServiceTool>(),
            // Service settings
            ToolDescriptor::of::<ChangeHostnameTool>(),
            ToolDescriptor::of::<ChangeRootPasswordTool>(),
            ToolDescriptor::of::<GetServiceSettingsTool>(),
            ToolDescriptor::of::<ToggleServiceFeatureTool>(),
            ToolDescriptor::of::<SetReverseDnsTool>(),
            ToolDescriptor::of::<ListServiceIpsTool>(),
            ToolDescriptor::of::<GetServiceStatisticsTool>(),
            // Operating system
            ToolDescriptor::of::<ListOsTemplatesTool>(),
            ToolDescriptor::of::<ReinstallOsTool>(),
            // Plan change
            ToolDescriptor::of::<ListUpgradePlansTool>(),
            ToolDescriptor::of::<GetPlanChangePriceTool>(),
            ToolDescriptor::of::<ChangePlanTool>(),
            // Billing
            ToolDescriptor::of::<GetRenewalOptionsTool>(),
            ToolDescriptor::of::<RenewServiceTool>(),
            ToolDescriptor::of::<SetAutoRenewTool>(),
            // Ordering
            ToolDescriptor::of::<ListPlansTool>(),
            ToolDescriptor::of::<GetPlanTool>(),
            ToolDescriptor::of::<ListPlanResourcesTool>(),
            ToolDescriptor::of::<CalculateOrderPriceTool>(),
            ToolDescriptor::of::<OrderServiceTool>(),
            // Backups
            ToolDescriptor::of::<ListBackupsTool>(),
            ToolDescriptor::of::<CreateBackupTool>(),
            ToolDescriptor::of::<RestoreBackupTool>(),
            ToolDescriptor::of::<DeleteBackupTool>(),
            ToolDescriptor::of::<ListBackupPlansTool>(),
            ToolDescriptor::of::<OrderBackupPlanTool>(),
            // SSH keys
            ToolDescriptor::of::<ListSshKeysTool>(),
            ToolDescriptor::of::<GetSshKeyTool>(),
            ToolDescriptor::of::<AddSshKeyTool>(),
            ToolDescriptor::of::<DeleteSshKeyTool>(),
            // API keys
            ToolDescriptor::of::<ListApiKeysTool>(),
            ToolDescriptor::of::<CreateApiKeyTool>(),
            ToolDescriptor::of::<DeleteApiKeyTool>(),
            // History
            ToolDescriptor::of::<ListInvoicesTool>(),
            ToolDescriptor::of::<ListPaymentsTool>(),
            ToolDescriptor::of::<ListActivityTool>(),
            // Public
            ToolDescriptor::of::<ListLocationsTool>(),
            ToolDescriptor::of::<ListOperatingSystemsTool>(),
            ToolDescriptor::of::<ListPaymentMethodsTool>(),
        ]
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    /// Iterate over the registered descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.iter().map(ToolDescriptor::to_tool).collect()
    }

    /// Invoke a tool: validate, issue exactly one upstream call, package the body.
    ///
    /// Lookup and validation failures return before anything is sent.
    /// Upstream bodies are returned as-is whatever the status code.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let Some(descriptor) = self.tools.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        let request = descriptor.build_request(arguments).inspect_err(|e| {
            warn!("Rejected tool call: {}", e);
        })?;

        info!(method = %request.method, path = %request.path, "Calling upstream API");
        let response = self.client.send(&request).await.inspect_err(|e| {
            warn!(timeout = e.is_timeout(), "Upstream call failed: {}", e);
        })?;

        if response.is_success() {
            debug!(status = response.status, "Upstream call succeeded");
        } else {
            warn!(status = response.status, "Upstream returned non-success status");
        }

        tool_result(&response.body)
    }

    /// Dispatch an HTTP tool call (JSON-RPC `tools/call`).
    ///
    /// Unknown tools and non-object arguments are protocol errors; every
    /// other failure is reported inside the result with `isError`.
    #[cfg(feature = "http")]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, String> {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            _ => return Err("Tool arguments must be a JSON object".to_string()),
        };

        let result = match self.invoke(name, arguments).await {
            Ok(result) => result,
            Err(e @ ToolError::UnknownTool(_)) => return Err(e.to_string()),
            Err(e) => e.into_call_result(),
        };

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

/// Wrap an upstream body as a tool result holding its pretty-printed JSON.
pub fn tool_result(body: &Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(body)
        .map_err(|e| ToolError::internal(format!("Failed to render response: {}", e)))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
