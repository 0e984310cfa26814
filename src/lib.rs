//! VPS MCP Server Library
//!
//! Exposes the management REST API of a VPS hosting provider as a set of
//! Model Context Protocol tools. Each tool validates its arguments against
//! a typed schema, issues exactly one authenticated HTTP request, and
//! returns the upstream JSON body unchanged.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the upstream API client, the
//!   MCP server handler and the transports
//! - **domains::tools**: the tool table, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use vps_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
