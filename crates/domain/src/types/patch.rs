//! JSON-patch operations used to update agreements

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperation {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl_domain_status_conversions!(PatchOperation {
    Add => "add",
    Remove => "remove",
    Replace => "replace",
    Move => "move",
    Copy => "copy",
    Test => "test",
});

/// One JSON-patch operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchRequest {
    pub op: PatchOperation,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchRequest {
    /// Replace the value at `path`
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self { op: PatchOperation::Replace, path: path.into(), value: Some(value) }
    }

    /// Add `value` at `path`
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self { op: PatchOperation::Add, path: path.into(), value: Some(value) }
    }

    /// Remove the value at `path`
    pub fn remove(path: impl Into<String>) -> Self {
        Self { op: PatchOperation::Remove, path: path.into(), value: None }
    }
}
