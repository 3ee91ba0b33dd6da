//! User tools.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, tool, tool_router,
    ErrorData as McpError,
};

use crate::mcp::protocol::Response;
use crate::mcp::server::McpServer;
use crate::models::PageParams;
use crate::services::UserService;

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = user_tools, vis = "pub(crate)")]
impl McpServer {
    /// List all users of the TROCCO organisation.
    ///
    /// Follows `next_cursor` until the last page; `limit` only sets the
    /// page size.
    #[tool(
        description = "List all users with their role, audit log permission, connection modify restriction and sign-in/created/updated timestamps."
    )]
    pub async fn list_users(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(limit = params.limit, cursor = ?params.cursor, "Running list_users tool");

        let users = self.resolve::<UserService>().list_users(&params).await?;

        tracing::info!(count = users.len(), "Users listed");
        Response(users).into()
    }
}
