//! Datamart definitions: materialised views and their refresh settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full datamart definition as returned by `GET /api/datamart_definitions/{id}`.
///
/// Optional fields the service did not send are left out again on encode.
/// Fields that are not modelled explicitly (the warehouse-specific option
/// objects, timestamps, anything added later) are kept in `settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatamartDefinitionDetail {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Warehouse kind (e.g., "bigquery", "snowflake").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_warehouse_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_runnable_concurrently: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    /// Warehouse-specific settings and any other field, kept verbatim.
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// A datamart definition exactly as the service sent it.
///
/// The description update writes this record back, so it is kept as raw
/// JSON: absent fields stay absent and explicit nulls stay null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatamartDefinitionRecord(pub Map<String, Value>);

impl DatamartDefinitionRecord {
    /// Replace the description, leaving every other field as fetched.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0
            .insert("description".to_string(), Value::String(description.into()));
        self
    }
}
