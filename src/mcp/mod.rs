//! Model Context Protocol (MCP) server implementation for trocco-mcp.
//!
//! This module provides an MCP server that lets AI assistants read and
//! update TROCCO resources through tools.
//!
//! ## Modules
//!
//! - `server`: MCP server with tool router and invocation checks
//! - `protocol`: tool result encoding
//! - `tools`: tool implementations organized by resource

pub(crate) mod protocol;
pub(crate) mod server;
mod tools;

pub use server::McpServer;
