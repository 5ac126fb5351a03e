//! Code execution tool adapter
//!
//! Exposes the execution engine as a named tool with a declared input
//! schema. The adapter draws the error boundary the engine's propagation
//! policy calls for: user-code faults come back inside the serialized
//! result, while infrastructure faults become a `ToolError` with a
//! human-readable message for the host to surface as a failed call.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::core_types::{ExecutionRequest, ToolMetadata};
use crate::errors::RunletError;
use crate::executors::CodeExecutor;
use crate::tools::Tool;

pub const RUN_CODE_TOOL_NAME: &str = "run_code";

pub struct RunCodeTool {
    executor: Arc<dyn CodeExecutor>,
}

impl RunCodeTool {
    pub fn new(executor: Arc<dyn CodeExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl Tool for RunCodeTool {
    fn metadata(&self) -> ToolMetadata {
        ToolMetadata {
            name: RUN_CODE_TOOL_NAME.to_string(),
            description: "Executes a fragment of source code and returns its resolved value together with everything written to stdout and stderr".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "The source code to execute. May import modules, await promises, and end in a return statement."
                    },
                    "description": {
                        "type": "string",
                        "description": "Optional human-readable label for this execution"
                    }
                },
                "required": ["code"]
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<String, RunletError> {
        let code = arguments
            .get("code")
            .and_then(|v| v.as_str())
            .ok_or_else(|| RunletError::ToolError {
                tool_name: RUN_CODE_TOOL_NAME.to_string(),
                message: "Missing or invalid 'code' parameter".to_string(),
            })?;

        let mut request = ExecutionRequest::new(code);
        if let Some(description) = arguments.get("description").and_then(|v| v.as_str()) {
            request = request.with_description(description);
        }

        let result =
            self.executor
                .execute(&request)
                .await
                .map_err(|e| RunletError::ToolError {
                    tool_name: RUN_CODE_TOOL_NAME.to_string(),
                    message: format!("Code execution failed: {}", e),
                })?;

        log::info!(
            "run_code finished (value: {}, stdout: {} bytes, stderr: {} bytes)",
            result.return_value.is_some(),
            result.stdout.len(),
            result.stderr.len()
        );

        serde_json::to_string(&result).map_err(|e| RunletError::InternalError(e.to_string()))
    }
}
