//! Core type definitions for the execution request/response contract
//!
//! These types form the boundary between the engine and whatever host mounts
//! it (a protocol adapter, a test harness, an agent loop). The request is
//! immutable once accepted, and the result is the only artifact that outlives
//! an execution: it carries no reference back to the workspace or harness
//! that produced it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fragment of source code submitted for execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Arbitrary executable source text.
    pub code: String,
    /// Human-readable label for logs. Never used in execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExecutionRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of one execution.
///
/// `return_value` is a closed union: `None` means the script produced no
/// decodable value (it threw, failed to parse, or its payload was not valid
/// JSON), `Some(v)` is the decoded value. User-code failures are data here,
/// not errors; they show up as a `None` value plus diagnostic text in
/// `stderr`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub return_value: Option<Value>,
    /// Captured standard output with the sentinel line stripped.
    pub stdout: String,
    /// Captured standard error, raw and unfiltered.
    pub stderr: String,
}

/// Metadata describing a tool to its host: the name it is invoked by, a
/// description, and a JSON Schema for its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMetadata {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}
