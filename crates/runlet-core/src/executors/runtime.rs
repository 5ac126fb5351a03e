//! Runtime-backed executor
//!
//! The concrete pipeline: split the submitted source, synthesize the
//! harness, persist it into a fresh workspace, launch the runtime, decode
//! the captured output, and release the workspace on every path out.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ExecutorConfig;
use crate::core_types::{ExecutionRequest, ExecutionResult};
use crate::decode::decode;
use crate::errors::ExecutorError;
use crate::harness::synthesize;
use crate::launcher::{HarnessLauncher, RawOutput, RuntimeLauncher};
use crate::source::split_source;
use crate::workspace::EphemeralWorkspace;

use super::CodeExecutor;

pub struct RuntimeCodeExecutor {
    launcher: Arc<dyn HarnessLauncher>,
    /// The caller's project directory; the child runs here, never inside
    /// the ephemeral workspace.
    working_dir: PathBuf,
    /// Home directory used for alias expansion. Matches the HOME the
    /// launcher hands to the child, so the textual rewrite and the
    /// runtime's own resolution agree.
    home_dir: PathBuf,
}

impl RuntimeCodeExecutor {
    /// Build an executor from configuration, resolving the runtime binary
    /// and the working/home directories up front.
    pub fn from_config(config: &ExecutorConfig) -> Result<Self, ExecutorError> {
        let launcher = RuntimeLauncher::new(
            &config.runtime,
            config.runtime_args.clone(),
            config.home_dir.clone(),
        )?;
        let home_dir = launcher.home_dir().to_path_buf();
        let working_dir = match &config.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self {
            launcher: Arc::new(launcher),
            working_dir,
            home_dir,
        })
    }

    /// Assemble an executor around an arbitrary launcher. This is the seam
    /// the tests use to substitute a fake process.
    pub fn with_launcher(
        launcher: Arc<dyn HarnessLauncher>,
        working_dir: PathBuf,
        home_dir: PathBuf,
    ) -> Self {
        Self {
            launcher,
            working_dir,
            home_dir,
        }
    }

    async fn run_in_workspace(
        &self,
        workspace: &EphemeralWorkspace,
        program: &str,
    ) -> Result<RawOutput, ExecutorError> {
        let harness_path = workspace.write_harness(program).await?;
        self.launcher.launch(&harness_path, &self.working_dir).await
    }
}

#[async_trait]
impl CodeExecutor for RuntimeCodeExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ExecutorError> {
        if let Some(description) = &request.description {
            log::info!("executing code fragment: {}", description);
        }

        let parsed = split_source(&request.code, &self.home_dir);
        let program = synthesize(&parsed);
        log::debug!(
            "synthesized harness ({} import lines, {} body lines)",
            parsed.imports.len(),
            parsed.body.len()
        );

        let workspace = EphemeralWorkspace::acquire()?;
        let outcome = self.run_in_workspace(&workspace, &program).await;
        // Release before interpreting the outcome so the workspace is gone
        // on the launch-failure and read-failure paths too.
        workspace.release();
        let raw = outcome?;

        let decoded = decode(&raw.stdout);
        Ok(ExecutionResult {
            return_value: decoded.return_value,
            stdout: decoded.stdout,
            stderr: raw.stderr,
        })
    }
}
