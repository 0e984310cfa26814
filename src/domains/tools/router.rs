//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO and TCP transports. Every route forwards to
//! [`ToolRegistry::invoke`], so routing and validation live in one place.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, JsonObject},
};
use tracing::error;

use super::{ToolDescriptor, ToolRegistry};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(descriptor, registry.clone()))
        })
}

/// Create a route dispatching one tool through the registry.
fn create_route<S>(descriptor: &ToolDescriptor, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name();
    ToolRoute::new_dyn(descriptor.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        async move { Ok::<_, McpError>(dispatch(&registry, name, args).await) }.boxed()
    })
}

/// Run a routed call. The router only reaches registered names, so every
/// failure here is reported inside the result.
async fn dispatch(registry: &ToolRegistry, name: &str, args: JsonObject) -> CallToolResult {
    registry.invoke(name, args).await.unwrap_or_else(|e| {
        if !e.is_local() {
            error!(tool = name, "Tool call failed: {}", e);
        }
        e.into_call_result()
    })
}
