//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: tools that wrap the upstream VPS API.

pub mod tools;
