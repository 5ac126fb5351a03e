//! Tool surface for mounting the engine into an agent host
//!
//! The engine itself never knows the transport it is exposed over. A host
//! (an MCP server, an agent loop) sees tools through this trait: metadata
//! with a declared JSON Schema input, and an execute call taking loosely
//! typed arguments and returning text. The registry is the small amount of
//! bookkeeping a host needs to mount and look up tools by name.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core_types::ToolMetadata;
use crate::errors::RunletError;

#[async_trait]
pub trait Tool: Send + Sync {
    fn metadata(&self) -> ToolMetadata;
    async fn execute(&self, arguments: Value) -> Result<String, RunletError>;
}

pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.metadata().name.clone();
        self.tools.insert(name, tool);
    }

    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list_tools(&self) -> Vec<ToolMetadata> {
        self.tools.values().map(|tool| tool.metadata()).collect()
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub mod run_code;

pub use run_code::RunCodeTool;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{ExecutionRequest, ExecutionResult};
    use crate::errors::ExecutorError;
    use crate::executors::CodeExecutor;
    use serde_json::json;

    struct EchoExecutor;

    #[async_trait]
    impl CodeExecutor for EchoExecutor {
        async fn execute(
            &self,
            request: &ExecutionRequest,
        ) -> Result<ExecutionResult, ExecutorError> {
            Ok(ExecutionResult {
                return_value: Some(json!(request.code)),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        assert_eq!(registry.tool_count(), 0);

        registry.register_tool(Arc::new(RunCodeTool::new(Arc::new(EchoExecutor))));
        assert_eq!(registry.tool_count(), 1);
        assert!(registry.get_tool("run_code").is_some());
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_registry_lists_metadata() {
        let mut registry = ToolRegistry::new();
        registry.register_tool(Arc::new(RunCodeTool::new(Arc::new(EchoExecutor))));

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "run_code");
    }
}
