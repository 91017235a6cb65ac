//! Logging configuration and subscriber setup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::EnvFilter;

use crate::ConfigError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "RELAY_LOG_FILTER";

fn default_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `relay_matcher=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Write through the test harness's captured output instead of stderr.
    #[serde(default)]
    pub test_writer: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            test_writer: false,
        }
    }
}

/// The filter `init_tracing` installs: `RELAY_LOG_FILTER` if set and valid,
/// `config.filter` otherwise.
#[must_use]
pub fn resolve_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install a global `fmt` subscriber writing to stderr, or to the test
/// harness when `config.test_writer` is set.
///
/// # Errors
///
/// Returns [`ConfigError::Tracing`] if a global subscriber is already set.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    let writer = if config.test_writer {
        BoxMakeWriter::new(TestWriter::new())
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(config))
        .with_writer(writer)
        .try_init()
        .map_err(|error| ConfigError::Tracing(error.to_string()))
}
