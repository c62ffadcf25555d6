use crate::{ApiConfig, ConfigError, ConfigErrorResult, DEFAULT_LOCALE, EntryConfig, LoggingConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

/// Immutable configuration record for the dashboard companion.
///
/// Constructed once at startup and passed explicitly to the components that
/// need it; nothing here is written after load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub entry: EntryConfig,
    /// BCP 47 locale tag for the UI shell
    pub locale: String,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            entry: EntryConfig::default(),
            locale: String::from(DEFAULT_LOCALE),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for UA_CONFIG_DIR env var, else use ./.ua/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply UA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UA_CONFIG_DIR env var > ./.ua/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("UA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ua"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::api("api.base_url cannot be empty"));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.api.base_url
            )));
        }
        if !self.api.prefix.is_empty() && !self.api.prefix.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.prefix must start with '/', got {}",
                self.api.prefix
            )));
        }

        for (name, path) in [
            ("entry.authenticated_path", &self.entry.authenticated_path),
            (
                "entry.unauthenticated_path",
                &self.entry.unauthenticated_path,
            ),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::entry(format!(
                    "{} must start with '/', got {}",
                    name, path
                )));
            }
        }

        if self.locale.is_empty() {
            return Err(ConfigError::config("locale cannot be empty"));
        }

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {}{} (mock: {})",
            self.api.base_url,
            self.api.prefix,
            if self.api.mock_enabled { "on" } else { "off" }
        );
        info!(
            "  entry: {} / {} (unauthenticated)",
            self.entry.authenticated_path, self.entry.unauthenticated_path
        );
        info!("  locale: {}", self.locale);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level.as_str(),
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("UA_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("UA_API_PREFIX", &mut self.api.prefix);
        Self::apply_env_bool("UA_MOCK_ENABLED", &mut self.api.mock_enabled);

        // Entry
        Self::apply_env_string("UA_ENTRY_PATH", &mut self.entry.authenticated_path);
        Self::apply_env_string("UA_UNAUTH_ENTRY_PATH", &mut self.entry.unauthenticated_path);

        // Locale
        Self::apply_env_string("UA_LOCALE", &mut self.locale);

        // Logging
        Self::apply_env_parse("UA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UA_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
