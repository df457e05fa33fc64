use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// One finding reported by the scanning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub rule_id: String,
    pub title: String,
    pub severity: Severity,
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

impl Vulnerability {
    /// Code excerpt, if the service sent a non-empty one
    pub fn snippet(&self) -> Option<&str> {
        non_empty(&self.snippet)
    }

    /// Suggested fix, if the service sent a non-empty one
    pub fn recommendation(&self) -> Option<&str> {
        non_empty(&self.recommendation)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
