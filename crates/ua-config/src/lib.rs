mod api_config;
mod config;
mod entry_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use entry_config::EntryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_API_PREFIX: &str = "/admin";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";
const DEFAULT_UNAUTHENTICATED_PATH: &str = "/sign-in";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
