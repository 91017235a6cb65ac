//! Matcher behaviour settings.

use relay_core::SpyMode;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default cap on calls enumerated in a failure message.
const fn default_max_listed_calls() -> usize {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatcherConfig {
    /// Whether spies only record calls or also forward them to the real delegate.
    #[serde(default)]
    pub spy_mode: SpyMode,

    /// Maximum number of recorded calls listed in a failure message.
    #[serde(default = "default_max_listed_calls")]
    pub max_listed_calls: usize,
}

impl MatcherConfig {
    /// Reject values the matcher cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `max_listed_calls` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_listed_calls == 0 {
            return Err(ConfigError::InvalidValue {
                field: "matcher.max_listed_calls".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            spy_mode: SpyMode::default(),
            max_listed_calls: default_max_listed_calls(),
        }
    }
}
