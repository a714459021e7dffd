//! Output types from generative responses.

use serde::{Deserialize, Serialize};

/// One payload returned by the generative service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Free text.
    Text(String),

    /// Structured JSON (schema-validated when a schema was requested).
    Json(serde_json::Value),
}
