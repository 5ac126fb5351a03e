//! Configuration module for the execution engine
//!
//! Supports YAML configuration files and programmatic construction via the
//! `Default` impls on the types.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

use crate::errors::RunletError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<RunletConfig, RunletError> {
    ConfigLoader::from_file(path).await
}
