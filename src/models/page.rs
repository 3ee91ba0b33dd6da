//! Wire envelope shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated collection.
///
/// A `next_cursor` of `null` (or a missing field) marks the last page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
