//! Datamart definition tools.

use rmcp::{
    handler::server::wrapper::Parameters, model::CallToolResult, tool, tool_router,
    ErrorData as McpError,
};

use crate::mcp::protocol::Response;
use crate::mcp::server::McpServer;
use crate::models::{DatamartDefinitionIdParams, UpdateDatamartDescriptionParams};
use crate::services::DatamartService;

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router(router = datamart_tools, vis = "pub(crate)")]
impl McpServer {
    /// Get one datamart definition with all of its settings.
    #[tool(
        description = "Get a datamart definition: name, description, warehouse settings, resource group, schedules, notifications and labels."
    )]
    pub async fn get_datamart_definition_detail(
        &self,
        Parameters(params): Parameters<DatamartDefinitionIdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            id = %params.datamart_definition_id,
            "Running get_datamart_definition_detail tool"
        );

        let datamart = self
            .resolve::<DatamartService>()
            .get_datamart_definition(&params)
            .await?;

        Response(datamart).into()
    }

    /// Replace the description of a datamart definition.
    ///
    /// The current definition is fetched first and written back whole with
    /// only the description changed, so no other setting is lost.
    #[tool(
        description = "Update the description of a datamart definition. All other settings are kept. Returns the updated definition."
    )]
    pub async fn update_datamart_definition_description(
        &self,
        Parameters(params): Parameters<UpdateDatamartDescriptionParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            id = %params.datamart_definition_id,
            "Running update_datamart_definition_description tool"
        );

        let datamart = self
            .resolve::<DatamartService>()
            .update_description(&params)
            .await?;

        tracing::info!(id = datamart.id, "Datamart definition description updated");
        Response(datamart).into()
    }
}
