//! Configuration type definitions for the execution engine
//!
//! The engine has few knobs, so the configuration stays flat: which runtime
//! binary launches harnesses, extra arguments for it, and optional overrides
//! for the working and home directories. Every field defaults, so an empty
//! YAML document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::RunletError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunletConfig {
    #[serde(default)]
    pub executor: ExecutorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Runtime executable that runs harness files, resolved on PATH.
    #[serde(default = "default_runtime")]
    pub runtime: String,
    /// Arguments placed before the harness path on the command line.
    #[serde(default)]
    pub runtime_args: Vec<String>,
    /// Working directory for the child process. Defaults to the engine
    /// process's current directory.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    /// HOME for alias expansion and the child environment. Defaults to the
    /// platform-detected home directory.
    #[serde(default)]
    pub home_dir: Option<PathBuf>,
}

fn default_runtime() -> String {
    "bun".to_string()
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            runtime_args: Vec::new(),
            working_dir: None,
            home_dir: None,
        }
    }
}

impl RunletConfig {
    pub fn validate(&self) -> Result<(), RunletError> {
        if self.executor.runtime.trim().is_empty() {
            return Err(RunletError::ConfigError(
                "executor.runtime must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
