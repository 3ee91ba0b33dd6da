//! MCP server implementation for trocco-mcp.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext, ServerHandler},
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{
    DatamartDefinitionIdParams, PageParams, PipelineDefinitionIdParams,
    UpdateDatamartDescriptionParams,
};

/// TROCCO MCP Server.
///
/// This server provides AI assistants with tools to:
/// - List the users of the organisation
/// - Inspect datamart definitions and update their descriptions
/// - Inspect pipeline definitions
#[derive(Clone)]
pub struct McpServer {
    pub(crate) ctx: Arc<Context>,
    tool_router: ToolRouter<McpServer>,
}

impl McpServer {
    /// Create a new MCP server with the given context.
    pub fn new(ctx: Context) -> Self {
        tracing::info!("Initializing trocco-mcp server");

        Self {
            ctx: Arc::new(ctx),
            tool_router: Self::tool_router(),
        }
    }

    /// Build the combined tool router from all tool modules.
    fn tool_router() -> ToolRouter<Self> {
        Self::user_tools() + Self::datamart_tools() + Self::pipeline_tools()
    }

    /// Every tool this server advertises, with its input schema.
    pub fn tool_catalogue() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    /// Tools advertised by this instance.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Resolve a dependency from the context.
    pub fn resolve<T: FromRef<Context>>(&self) -> T {
        T::from_ref(&self.ctx)
    }

    /// Reject an invocation before anything is routed: unknown tools, a
    /// missing arguments object, and arguments that do not parse into the
    /// tool's parameter type or break its bounds.
    pub fn check_invocation(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<(), AppError> {
        if !self.tools().iter().any(|tool| tool.name == name) {
            tracing::warn!(tool = name, "Unknown tool requested");
            return Err(AppError::UnknownTool(name.to_string()));
        }
        let Some(arguments) = arguments else {
            tracing::warn!(tool = name, "Tool invoked without arguments");
            return Err(AppError::MissingArguments(name.to_string()));
        };

        let checked = match name {
            "list_users" | "list_pipeline_definitions" => check_arguments::<PageParams>(arguments),
            "get_datamart_definition_detail" => {
                check_arguments::<DatamartDefinitionIdParams>(arguments)
            }
            "update_datamart_definition_description" => {
                check_arguments::<UpdateDatamartDescriptionParams>(arguments)
            }
            "get_pipeline_definition_detail" => {
                check_arguments::<PipelineDefinitionIdParams>(arguments)
            }
            _ => Ok(()),
        };
        if let Err(err) = &checked {
            tracing::warn!(tool = name, error = %err, "Tool invoked with invalid arguments");
        }
        checked
    }
}

/// Parse `arguments` as `T` and check its bounds.
fn check_arguments<T>(arguments: &JsonObject) -> Result<(), AppError>
where
    T: DeserializeOwned + Validate,
{
    let params: T = serde_json::from_value(serde_json::Value::Object(arguments.clone()))
        .map_err(|err| AppError::InvalidArguments(err.to_string()))?;
    params.validate()?;
    Ok(())
}

// ============================================================================
// Server Handler
// ============================================================================

impl ServerHandler for McpServer {
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.check_invocation(&request.name, request.arguments.as_ref())?;

        let tool_context = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_context).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                r#"trocco-mcp - TROCCO API MCP Server

Read and update resources of a TROCCO account.

## Users

- **list_users** - List all users (role, audit log access, sign-in times)

## Datamart Definitions

- **get_datamart_definition_detail** - Get a datamart definition with all settings
- **update_datamart_definition_description** - Replace the description only; other settings are kept

## Pipeline Definitions

- **list_pipeline_definitions** - List all pipeline definitions (id and name)
- **get_pipeline_definition_detail** - Get tasks, dependencies, schedules and execution settings

## Notes

- List tools fetch every page; `limit` (1-200, default 50) is the page size
- Results are returned as indented JSON
"#
                .to_string(),
            ),
        }
    }
}
