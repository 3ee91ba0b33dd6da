//! Tool argument types.
//!
//! The `#[validate(...)]` attributes serve twice: `validator` checks them
//! before any request is made, and `schemars` reads the same attributes when
//! generating the input schema advertised for each tool.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MIN_PAGE_LIMIT: u32 = 1;
pub const MAX_PAGE_LIMIT: u32 = 200;
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

/// Page size and starting point for list tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct PageParams {
    /// Number of items requested per page (1-200). All pages are fetched.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 200))]
    pub limit: u32,

    /// Cursor returned by a previous listing; starts from the beginning if omitted.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub cursor: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: None,
        }
    }
}

impl PageParams {
    /// Query parameters sent with every page request.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("limit", self.limit.to_string())];
        if let Some(cursor) = &self.cursor {
            query.push(("cursor", cursor.clone()));
        }
        query
    }
}

/// Identifies one datamart definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct DatamartDefinitionIdParams {
    /// ID of the datamart definition.
    #[validate(length(min = 1))]
    pub datamart_definition_id: String,
}

/// Arguments for replacing a datamart definition's description.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct UpdateDatamartDescriptionParams {
    /// ID of the datamart definition.
    #[validate(length(min = 1))]
    pub datamart_definition_id: String,

    /// New description. Every other field of the definition is left as is.
    pub description: String,
}

/// Identifies one pipeline definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct PipelineDefinitionIdParams {
    /// ID of the pipeline definition.
    #[validate(length(min = 1))]
    pub pipeline_definition_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limit_defaults_to_50() {
        let params: PageParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.limit, DEFAULT_PAGE_LIMIT);
        assert!(params.cursor.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        for limit in [MIN_PAGE_LIMIT, 100, MAX_PAGE_LIMIT] {
            let params = PageParams {
                limit,
                cursor: None,
            };
            assert!(params.validate().is_ok(), "limit {limit} should be valid");
        }
        for limit in [0, MAX_PAGE_LIMIT + 1, 10_000] {
            let params = PageParams {
                limit,
                cursor: None,
            };
            assert!(params.validate().is_err(), "limit {limit} should be rejected");
        }
    }

    #[test]
    fn test_non_integer_limit_does_not_parse() {
        for limit in [json!(1.5), json!("50"), json!(-1), json!(null)] {
            let parsed = serde_json::from_value::<PageParams>(json!({ "limit": limit }));
            assert!(parsed.is_err(), "limit {limit} should not parse");
        }
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let params = DatamartDefinitionIdParams {
            datamart_definition_id: String::new(),
        };
        assert!(params.validate().is_err());

        let params = PipelineDefinitionIdParams {
            pipeline_definition_id: "12".to_string(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_description_is_required() {
        let parsed = serde_json::from_value::<UpdateDatamartDescriptionParams>(
            json!({ "datamart_definition_id": "1" }),
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_to_query() {
        let params = PageParams {
            limit: 20,
            cursor: Some("abc".to_string()),
        };
        assert_eq!(
            params.to_query(),
            vec![("limit", "20".to_string()), ("cursor", "abc".to_string())]
        );
    }

    #[test]
    fn test_schema_carries_validation_bounds() {
        let schema = serde_json::to_value(schemars::schema_for!(PageParams)).unwrap();
        let limit = &schema["properties"]["limit"];
        assert_eq!(limit["minimum"].as_f64(), Some(f64::from(MIN_PAGE_LIMIT)));
        assert_eq!(limit["maximum"].as_f64(), Some(f64::from(MAX_PAGE_LIMIT)));
        assert_eq!(limit["default"].as_u64(), Some(u64::from(DEFAULT_PAGE_LIMIT)));

        let schema = serde_json::to_value(schemars::schema_for!(UpdateDatamartDescriptionParams))
            .unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("datamart_definition_id")));
        assert!(required.contains(&json!("description")));
    }
}
