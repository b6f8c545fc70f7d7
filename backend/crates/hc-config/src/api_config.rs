use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOCAL_API};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which backend the client talks to.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    #[default]
    Local,
    Production,
}

impl FromStr for ApiEnvironment {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "local" | "development" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::api(format!(
                "api.environment must be 'local' or 'production', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Configuration for the REST backend
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub environment: ApiEnvironment,
    /// Backend used in the local environment
    pub local_url: String,
    /// Backend used in production; required when environment = "production"
    pub live_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::default(),
            local_url: String::from(DEFAULT_LOCAL_API),
            live_url: None,
        }
    }
}

impl ApiConfig {
    /// Base URL for the selected environment, without a trailing slash.
    #[track_caller]
    pub fn base_url(&self) -> ConfigErrorResult<String> {
        let url = match self.environment {
            ApiEnvironment::Local => Some(self.local_url.as_str()),
            ApiEnvironment::Production => self.live_url.as_deref(),
        };

        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => Ok(url.trim_end_matches('/').to_string()),
            None => Err(ConfigError::api(format!(
                "no API url configured for the '{}' environment",
                self.environment
            ))),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url()?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api url must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(())
    }
}
