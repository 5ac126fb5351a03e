//! YAML configuration loading

use std::path::Path;

use crate::errors::RunletError;

use super::types::RunletConfig;

pub struct ConfigLoader;

impl ConfigLoader {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<RunletConfig, RunletError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            RunletError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<RunletConfig, RunletError> {
        let config: RunletConfig = serde_yaml::from_str(contents)
            .map_err(|e| RunletError::ConfigError(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
