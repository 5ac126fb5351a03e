//! Code execution pipeline
//!
//! Ties the pure text transforms, the ephemeral workspace, and the process
//! launcher into one request-scoped flow. Each request owns its own
//! workspace and child process, so concurrent executions are fully isolated
//! and need no locking discipline.

use async_trait::async_trait;

use crate::core_types::{ExecutionRequest, ExecutionResult};
use crate::errors::ExecutorError;

#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Run one submitted code fragment to completion.
    ///
    /// User-code faults (parse errors, thrown errors) come back as `Ok`
    /// results with diagnostic stderr and an absent return value; `Err` is
    /// reserved for infrastructure faults (workspace, spawn, pipe read).
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ExecutorError>;
}

pub mod runtime;

pub use runtime::RuntimeCodeExecutor;
