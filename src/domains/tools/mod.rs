//! Tools domain module.
//!
//! Every tool maps one MCP tool call onto exactly one request against the
//! upstream VPS API and returns the decoded response body verbatim.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool definitions grouped by API area
//! - `descriptor.rs` - The [`ApiTool`] trait and type-erased [`ToolDescriptor`]
//! - `registry.rs` - Central tool table, validation and dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing [`ApiTool`] in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Append `ToolDescriptor::of::<YourTool>()` to `ToolRegistry::descriptors()`
//!
//! The router and the HTTP transport pick it up from the registry.

pub mod definitions;
pub mod descriptor;
mod error;
mod registry;
pub mod router;

pub use descriptor::{ApiTool, ArgumentError, ToolDescriptor};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
