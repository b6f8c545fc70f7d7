use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE};

use std::path::Path;

use serde::Deserialize;

/// Where the persisted session lives, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: String::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.session_file cannot be empty"));
        }

        let path = Path::new(&self.session_file);
        if path.is_absolute() || self.session_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.session_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
