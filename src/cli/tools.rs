//! Tool catalogue command handler.

use color_eyre::Result;

use crate::mcp::McpServer;

use super::App;

impl App {
    /// Print the tool catalogue as indented JSON on stdout.
    pub fn run_tools(&self) -> Result<()> {
        let tools = McpServer::tool_catalogue();
        tracing::debug!(count = tools.len(), "Printing tool catalogue");

        println!("{}", serde_json::to_string_pretty(&tools)?);
        Ok(())
    }
}
