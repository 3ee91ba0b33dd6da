//! User accounts of the TROCCO organisation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as returned by `GET /api/users`.
///
/// Optional fields the service left out are left out on encode too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Role name (e.g., "super_admin", "admin", "member").
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_use_audit_log: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_restricted_connection_modify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Fields not modelled above, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
