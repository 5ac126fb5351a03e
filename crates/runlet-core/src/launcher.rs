//! Process execution adapter
//!
//! Launches an isolated runtime process pointed at a harness file and
//! captures both output streams to completion. The working directory is the
//! caller's project directory, never the ephemeral workspace, so any
//! filesystem-relative resolution done by imported code sees the caller's
//! tree. The environment is inherited with `HOME` explicitly set, keeping
//! alias-expansion semantics consistent between the textual rewrite and
//! whatever expansion the runtime performs at module resolution time.
//!
//! The launcher is a trait so the pipeline can be exercised with a fake
//! process in tests, mirroring how the rest of the crate keeps process-wide
//! state (environment, cwd) threaded as explicit inputs.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use which::which;

use crate::errors::ExecutorError;

/// Raw captured output of one harness run.
#[derive(Debug, Clone, Default)]
pub struct RawOutput {
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait HarnessLauncher: Send + Sync {
    /// Run the harness at `harness_path` with `working_dir` as the process
    /// working directory, draining both streams to completion.
    async fn launch(
        &self,
        harness_path: &Path,
        working_dir: &Path,
    ) -> Result<RawOutput, ExecutorError>;
}

/// Launcher backed by a real runtime executable (bun by default, any
/// program that accepts the harness file as its argument works).
#[derive(Debug)]
pub struct RuntimeLauncher {
    program: PathBuf,
    args: Vec<String>,
    home_dir: PathBuf,
}

impl RuntimeLauncher {
    /// Resolve `program` on PATH and fix the `HOME` value the child will
    /// see. `home_dir` falls back to the platform-detected home directory.
    pub fn new(
        program: &str,
        args: Vec<String>,
        home_dir: Option<PathBuf>,
    ) -> Result<Self, ExecutorError> {
        let program =
            which(program).map_err(|_| ExecutorError::RuntimeNotFound(program.to_string()))?;
        let home_dir = home_dir
            .or_else(dirs::home_dir)
            .ok_or(ExecutorError::HomeDirUnavailable)?;
        Ok(Self {
            program,
            args,
            home_dir,
        })
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }
}

#[async_trait]
impl HarnessLauncher for RuntimeLauncher {
    async fn launch(
        &self,
        harness_path: &Path,
        working_dir: &Path,
    ) -> Result<RawOutput, ExecutorError> {
        log::debug!(
            "launching {} {} in {}",
            self.program.display(),
            harness_path.display(),
            working_dir.display()
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(harness_path)
            .current_dir(working_dir)
            .env("HOME", &self.home_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExecutorError::Launch {
                program: self.program.display().to_string(),
                message: e.to_string(),
            })?;

        let mut stdout_pipe = child.stdout.take().ok_or_else(|| ExecutorError::Launch {
            program: self.program.display().to_string(),
            message: "stdout pipe was not captured".to_string(),
        })?;
        let mut stderr_pipe = child.stderr.take().ok_or_else(|| ExecutorError::Launch {
            program: self.program.display().to_string(),
            message: "stderr pipe was not captured".to_string(),
        })?;

        // Drain both pipes concurrently. Reading them one after the other
        // can deadlock if the child fills one pipe's buffer while writing
        // heavily to the other.
        let stdout_fut = async {
            let mut buf = Vec::new();
            stdout_pipe.read_to_end(&mut buf).await?;
            Ok::<_, std::io::Error>(buf)
        };
        let stderr_fut = async {
            let mut buf = Vec::new();
            stderr_pipe.read_to_end(&mut buf).await?;
            Ok::<_, std::io::Error>(buf)
        };
        let (stdout_bytes, stderr_bytes) = tokio::try_join!(stdout_fut, stderr_fut)?;

        // The exit status is awaited but never interpreted: user-code
        // failure is communicated through stderr content downstream.
        let status = child.wait().await?;
        log::debug!("runtime process exited with {}", status);

        Ok(RawOutput {
            stdout: String::from_utf8(stdout_bytes)?,
            stderr: String::from_utf8(stderr_bytes)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_script(script: &str, home: Option<PathBuf>) -> RawOutput {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.sh");
        std::fs::write(&path, script).unwrap();
        let launcher = RuntimeLauncher::new("sh", vec![], home).unwrap();
        launcher.launch(&path, dir.path()).await.unwrap()
    }

    #[tokio::test]
    async fn test_captures_both_streams() {
        let output = run_script("echo out\necho err 1>&2\n", None).await;
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[tokio::test]
    async fn test_working_directory_is_callers() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().canonicalize().unwrap();
        let path = work.join("script.sh");
        std::fs::write(&path, "pwd\n").unwrap();
        let launcher = RuntimeLauncher::new("sh", vec![], None).unwrap();
        let output = launcher.launch(&path, &work).await.unwrap();
        assert_eq!(output.stdout.trim(), work.to_string_lossy());
    }

    #[tokio::test]
    async fn test_home_override_reaches_child() {
        let output = run_script("printf '%s' \"$HOME\"\n", Some(PathBuf::from("/tmp/fakehome"))).await;
        assert_eq!(output.stdout, "/tmp/fakehome");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let output = run_script("echo boom 1>&2\nexit 3\n", None).await;
        assert_eq!(output.stderr, "boom\n");
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_unknown_runtime_is_reported() {
        let err = RuntimeLauncher::new("runlet-no-such-runtime", vec![], None).unwrap_err();
        assert!(matches!(err, ExecutorError::RuntimeNotFound(_)));
    }
}
