mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use api_config::{ApiConfig, ApiEnvironment};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "HC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".hc";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_LOCAL_API: &str = "http://localhost:8080";
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

#[cfg(test)]
mod tests;
