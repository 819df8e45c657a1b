//! Error body returned by PayPal on failed requests

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub issue: String,
}

impl ErrorResponse {
    /// One-line description: name, message, field issues and debug id
    pub fn summary(&self) -> String {
        let mut summary = match (self.name.is_empty(), self.message.is_empty()) {
            (false, false) => format!("{}: {}", self.name, self.message),
            (false, true) => self.name.clone(),
            (true, _) => self.message.clone(),
        };

        if !self.details.is_empty() {
            let issues: Vec<String> =
                self.details.iter().map(|d| format!("{} {}", d.field, d.issue)).collect();
            summary.push_str(&format!(" [{}]", issues.join("; ")));
        }

        if let Some(debug_id) = &self.debug_id {
            summary.push_str(&format!(" (debug_id {debug_id})"));
        }

        summary
    }
}
