use serde::{Deserialize, Serialize};

/// One field-level entry of an HTTP 422 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetail {
    /// Location of the offending field, e.g. `["body", "topic"]`
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,

    /// Human-readable message
    pub msg: String,

    /// Machine-readable error type
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Body of an HTTP 422 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationDetail>,
}

impl ValidationErrorBody {
    /// Canonical summary: the first entry's message
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.detail.first().map(|d| d.msg.as_str())
    }
}
