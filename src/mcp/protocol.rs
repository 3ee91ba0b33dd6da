//! MCP protocol response helpers.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::error::AppError;

/// Tool result that encodes as a single pretty-printed JSON text block.
///
/// # Example
///
/// ```ignore
/// let users = service.list_users(&params).await?;
/// Response(users).into()
/// ```
pub struct Response<T>(pub T);

impl<T: Serialize> Response<T> {
    /// Render the inner value as indented JSON.
    pub fn to_text(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(&self.0).map_err(AppError::Encode)
    }
}

impl<T: Serialize> From<Response<T>> for Result<CallToolResult, rmcp::model::ErrorData> {
    fn from(response: Response<T>) -> Self {
        let text = response.to_text()?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
