//! Pipeline definitions: multi-task workflows and their execution settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// List view of a pipeline definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinitionSummary {
    pub id: i64,
    pub name: String,
}

/// Full pipeline definition as returned by `GET /api/pipeline_definitions/{id}`.
///
/// Optional fields the service left out are left out on encode too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinitionDetail {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_task_parallelism: Option<u32>,
    /// Execution timeout in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Minimum interval between retries in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_retry_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_concurrent_execution_skipped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stopped_on_errors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_dependencies: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
