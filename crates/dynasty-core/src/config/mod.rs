//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from a base TOML
//! file, an optional environment overlay and `DYNASTY__*` environment
//! variables. Every section has serde defaults, so a missing file yields a
//! usable configuration.

pub mod logging;
pub mod plugin;

use serde::{Deserialize, Serialize};

pub use self::logging::{LogFormat, LoggingConfig};
pub use self::plugin::PluginConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Plugin system settings.
    #[serde(default)]
    pub plugins: PluginConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `path` (extension optional), the overlay `config/{env}` and
    /// environment variables prefixed with `DYNASTY__`
    /// (e.g. `DYNASTY__PLUGINS__DIRECTORY`). Missing files are skipped.
    pub fn load(path: &str, env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DYNASTY")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("plugins.auto_activate")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the host cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.plugins.directory.trim().is_empty() {
            return Err(AppError::configuration("plugins.directory must not be empty"));
        }
        if self.plugins.extension.trim_start_matches('.').is_empty() {
            return Err(AppError::configuration("plugins.extension must not be empty"));
        }
        if self.logging.level.trim().is_empty() {
            return Err(AppError::configuration("logging.level must not be empty"));
        }
        Ok(())
    }
}
