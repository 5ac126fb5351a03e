//! Error types for failure handling across the execution engine
//!
//! This module provides a unified error hierarchy split into two layers. The
//! broad `RunletError` covers the crate's outer surfaces (tool adapters and
//! configuration), while `ExecutorError` captures faults raised while actually
//! running a harness. The split matters for propagation policy: user-code
//! failures are never errors at all (they flow through `ExecutionResult`),
//! whereas `ExecutorError` is reserved for infrastructure faults that the
//! calling layer must surface as a real failure.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RunletError {
    #[error("Tool execution failed for '{tool_name}': {message}")]
    ToolError { tool_name: String, message: String },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for RunletError {
    fn from(err: std::io::Error) -> Self {
        RunletError::IoError(err.to_string())
    }
}

// Specific error for the runtime executor
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Could not create temporary workspace: {0}")]
    Workspace(String),
    #[error("Failed to launch runtime process '{program}': {message}")]
    Launch { program: String, message: String },
    #[error("Runtime executable not found: {0}")]
    RuntimeNotFound(String),
    #[error("Could not determine a home directory for the runtime process")]
    HomeDirUnavailable,
    #[error("I/O error during execution: {0}")]
    IoError(#[from] std::io::Error),
    #[error("UTF-8 decoding error from process output: {0}")]
    StringFromUtf8Error(#[from] std::string::FromUtf8Error),
}
