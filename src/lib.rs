//! trocco-mcp - TROCCO API MCP Server
//!
//! Exposes users, datamart definitions and pipeline definitions of a TROCCO
//! account as Model Context Protocol tools.

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod mcp;
pub mod models;
pub mod services;

// Re-export FromRef at crate root so services can be resolved from the context
pub use di::FromRef;
