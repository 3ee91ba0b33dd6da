//! Application error types with MCP protocol conversion.

use rmcp::model::ErrorCode;
use thiserror::Error;

/// Application-level errors for trocco-mcp.
#[derive(Error, Debug)]
pub enum AppError {
    // Tool invocation errors
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing arguments for tool: {0}")]
    MissingArguments(String),

    // Remote API errors
    #[error("Request to {url} failed with status {status}")]
    RequestFailed { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode tool result: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Pagination stopped after {max_pages} pages with more results pending")]
    PaginationLimitExceeded { max_pages: u32 },
}

impl AppError {
    /// HTTP status returned by the remote service, if this is a `RequestFailed`.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable application code carried in the MCP error message.
    pub fn app_code(&self) -> &'static str {
        match self {
            AppError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            AppError::UnknownTool(_) => "UNKNOWN_TOOL",
            AppError::MissingArguments(_) => "MISSING_ARGUMENTS",
            AppError::RequestFailed { .. } => "REQUEST_FAILED",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Decode(_) => "TRANSPORT_ERROR",
            AppError::Encode(_) => "ENCODE_ERROR",
            AppError::InvalidUrl(_) => "INVALID_URL",
            AppError::InvalidHeader(_) => "CONFIG_ERROR",
            AppError::PaginationLimitExceeded { .. } => "PAGINATION_LIMIT_EXCEEDED",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidArguments(errors.to_string())
    }
}

impl From<AppError> for rmcp::model::ErrorData {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::InvalidArguments(_) => ErrorCode::INVALID_PARAMS,
            AppError::UnknownTool(_) => ErrorCode::INVALID_PARAMS,
            AppError::MissingArguments(_) => ErrorCode::INVALID_PARAMS,
            AppError::InvalidUrl(_) => ErrorCode::INTERNAL_ERROR,
            AppError::RequestFailed { .. } => ErrorCode::INTERNAL_ERROR,
            AppError::Transport(_) => ErrorCode::INTERNAL_ERROR,
            AppError::Decode(_) => ErrorCode::INTERNAL_ERROR,
            AppError::Encode(_) => ErrorCode::INTERNAL_ERROR,
            AppError::PaginationLimitExceeded { .. } => ErrorCode::INTERNAL_ERROR,
            AppError::InvalidHeader(_) => ErrorCode::INTERNAL_ERROR,
        };

        let data = err
            .status()
            .map(|status| serde_json::json!({ "status": status }));

        rmcp::model::ErrorData::new(code, format!("[{}] {}", err.app_code(), err), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_keeps_status() {
        let err = AppError::RequestFailed {
            status: 404,
            url: "https://trocco.io/api/users".to_string(),
        };
        assert_eq!(err.status(), Some(404));

        let data: rmcp::model::ErrorData = err.into();
        assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
        assert!(data.message.starts_with("[REQUEST_FAILED]"));
        assert!(data.message.contains("404"));
        assert_eq!(data.data, Some(serde_json::json!({ "status": 404 })));
    }

    #[test]
    fn test_argument_errors_are_invalid_params() {
        for err in [
            AppError::InvalidArguments("limit: out of range".to_string()),
            AppError::UnknownTool("drop_tables".to_string()),
            AppError::MissingArguments("list_users".to_string()),
        ] {
            let code = err.app_code();
            let data: rmcp::model::ErrorData = err.into();
            assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
            assert!(data.message.starts_with(&format!("[{code}]")));
            assert!(data.data.is_none());
        }
    }
}
