//! Runtime configuration for Spar
//!
//! Settings come from environment variables; command-line flags layer on
//! top through the `with_*` builders.

use serde::{Deserialize, Serialize};
use std::env;

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparConfig {
    /// Seed for rebuttal selection (env: SPAR_SEED); random when unset
    pub seed: Option<u64>,
    /// Enable debug logging (env: SPAR_DEBUG)
    pub debug: bool,
}

impl SparConfig {
    /// Load from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("SPAR_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::Invalid(format!(
                    "SPAR_SEED must be an unsigned integer ({raw:?}: {e})"
                ))
            })?),
            None => None,
        };

        let debug = lookup("SPAR_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self { seed, debug })
    }

    /// Override the seed when one is given
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
