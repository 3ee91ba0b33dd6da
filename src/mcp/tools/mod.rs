//! MCP tool implementations organized by resource.

pub mod datamart;
pub mod pipeline;
pub mod user;
