//! # relay-config
//!
//! Layered configuration loading for Relay using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RELAY_*` prefix, `__` as separator)
//! 2. Project-level `.relay/config.toml`
//! 3. User-level `~/.config/relay/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `RELAY_MATCHER__SPY_MODE` -> `matcher.spy_mode`,
//! `RELAY_LOG__FILTER` -> `log.filter`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use relay_config::RelayConfig;
//!
//! let config = RelayConfig::load_with_dotenv().expect("config");
//! relay_config::init_tracing(&config.log).ok();
//! println!("spy mode: {}", config.matcher.spy_mode);
//! ```

mod error;
mod log;
mod matcher;

pub use error::ConfigError;
pub use log::{init_tracing, resolve_filter, LogConfig, LOG_ENV_VAR};
pub use matcher::MatcherConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".relay/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl RelayConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] for unreadable or mistyped sources and
    /// [`ConfigError::InvalidValue`] for values that fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.matcher.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::layered(Self::global_config_path())
    }

    /// Provider chain with an explicit user-global config file.
    fn layered(global_path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RELAY_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("relay").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use relay_core::SpyMode;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = RelayConfig::default();
        assert_eq!(config.matcher.spy_mode, SpyMode::RecordOnly);
        assert_eq!(config.matcher.max_listed_calls, 20);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn global_file_sits_below_project_file() {
        figment::Jail::expect_with(|jail| {
            std::fs::create_dir_all("home/relay").map_err(|error| error.to_string())?;
            jail.create_file(
                "home/relay/config.toml",
                "[matcher]\nspy_mode = \"pass_through\"\nmax_listed_calls = 7\n",
            )?;

            let global = Some(jail.directory().join("home/relay/config.toml"));
            let config = RelayConfig::from_figment(&RelayConfig::layered(global.clone()))
                .expect("global config loads");
            assert_eq!(config.matcher.spy_mode, SpyMode::PassThrough);
            assert_eq!(config.matcher.max_listed_calls, 7);

            std::fs::create_dir(".relay").map_err(|error| error.to_string())?;
            jail.create_file(".relay/config.toml", "[matcher]\nmax_listed_calls = 3\n")?;

            let config = RelayConfig::from_figment(&RelayConfig::layered(global))
                .expect("layered config loads");
            assert_eq!(config.matcher.spy_mode, SpyMode::PassThrough);
            assert_eq!(config.matcher.max_listed_calls, 3);
            Ok(())
        });
    }

    #[test]
    fn missing_global_file_is_skipped() {
        figment::Jail::expect_with(|jail| {
            let global = Some(jail.directory().join("nowhere/config.toml"));
            let config = RelayConfig::from_figment(&RelayConfig::layered(global))
                .expect("defaults load");
            assert_eq!(config, RelayConfig::default());
            Ok(())
        });
    }

    #[test]
    fn defaults_survive_serialized_provider() {
        let figment = Figment::from(Serialized::defaults(RelayConfig::default()));
        let config = RelayConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config, RelayConfig::default());
    }
}
