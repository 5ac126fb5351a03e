//! Ephemeral workspace management
//!
//! Each execution gets its own uniquely named directory under the system
//! temp root, holding exactly one file: the harness. The workspace is owned
//! by a single execution and removed on every exit path. Removal errors are
//! swallowed; a cleanup failure must never mask or replace the primary
//! execution outcome.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::ExecutorError;

/// Fixed name of the harness file inside a workspace.
pub const HARNESS_FILE_NAME: &str = "harness.ts";

/// A short-lived, exclusively owned directory for one harness.
///
/// Dropping the workspace also removes the directory, so the tree is
/// cleaned up even on panic paths that never reach `release`.
#[derive(Debug)]
pub struct EphemeralWorkspace {
    dir: TempDir,
}

impl EphemeralWorkspace {
    /// Create a collision-resistant uniquely named directory under the
    /// system temp root.
    pub fn acquire() -> Result<Self, ExecutorError> {
        let dir = tempfile::Builder::new()
            .prefix("runlet-exec-")
            .tempdir()
            .map_err(|e| ExecutorError::Workspace(e.to_string()))?;
        log::debug!("acquired workspace at {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of the harness file, whether or not it exists yet.
    pub fn harness_path(&self) -> PathBuf {
        self.dir.path().join(HARNESS_FILE_NAME)
    }

    /// Persist the harness text under the fixed file name, flushed so the
    /// child process sees the full contents.
    pub async fn write_harness(&self, program: &str) -> Result<PathBuf, ExecutorError> {
        let path = self.harness_path();
        let mut file = fs::File::create(&path).await?;
        file.write_all(program.as_bytes()).await?;
        file.flush().await?;
        Ok(path)
    }

    /// Remove the directory and everything under it. Removal errors are
    /// logged and swallowed.
    pub fn release(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            log::warn!("failed to remove workspace {}: {}", path.display(), e);
        } else {
            log::debug!("released workspace at {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_acquire_write_release() {
        let ws = EphemeralWorkspace::acquire().unwrap();
        let dir = ws.path().to_path_buf();
        assert!(dir.exists());

        let harness = ws.write_harness("console.log('hi');\n").await.unwrap();
        assert_eq!(harness.file_name().unwrap(), HARNESS_FILE_NAME);
        let written = tokio::fs::read_to_string(&harness).await.unwrap();
        assert_eq!(written, "console.log('hi');\n");

        ws.release();
        assert!(!dir.exists());
    }

    #[test]
    fn test_workspaces_are_unique() {
        let a = EphemeralWorkspace::acquire().unwrap();
        let b = EphemeralWorkspace::acquire().unwrap();
        assert_ne!(a.path(), b.path());
        a.release();
        b.release();
    }

    #[test]
    fn test_release_tolerates_missing_directory() {
        let ws = EphemeralWorkspace::acquire().unwrap();
        std::fs::remove_dir_all(ws.path()).unwrap();
        // Must not panic or surface an error.
        ws.release();
    }

    #[test]
    fn test_drop_removes_directory() {
        let dir;
        {
            let ws = EphemeralWorkspace::acquire().unwrap();
            dir = ws.path().to_path_buf();
        }
        assert!(!dir.exists());
    }
}
