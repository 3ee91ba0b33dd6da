//! Pipeline definition tools.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, tool, tool_router,
    ErrorData as McpError,
};

use crate::mcp::protocol::Response;
use crate::mcp::server::McpServer;
use crate::models::{PageParams, PipelineDefinitionIdParams};
use crate::services::PipelineService;

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = pipeline_tools, vis = "pub(crate)")]
impl McpServer {
    /// List all pipeline definitions (id and name).
    #[tool(description = "List all pipeline definitions. Returns the id and name of each.")]
    pub async fn list_pipeline_definitions(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            limit = params.limit,
            cursor = ?params.cursor,
            "Running list_pipeline_definitions tool"
        );

        let pipelines = self
            .resolve::<PipelineService>()
            .list_pipeline_definitions(&params)
            .await?;

        tracing::info!(count = pipelines.len(), "Pipeline definitions listed");
        Response(pipelines).into()
    }

    /// Get one pipeline definition with its task graph and execution settings.
    #[tool(
        description = "Get a pipeline definition: tasks, task dependencies, schedules, notifications, labels, parallelism, timeout and retry settings."
    )]
    pub async fn get_pipeline_definition_detail(
        &self,
        Parameters(params): Parameters<PipelineDefinitionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            id = %params.pipeline_definition_id,
            "Running get_pipeline_definition_detail tool"
        );

        let pipeline = self
            .resolve::<PipelineService>()
            .get_pipeline_definition(&params)
            .await?;

        Response(pipeline).into()
    }
}
