//! Interpreter settings
//!
//! Settings start from their defaults and are overridden by the environment,
//! e.g. `NOTJS_MAX_CALL_DEPTH=1000`.

use ::config::{Config as Settings, ConfigError, Environment, Source};
use log::warn;
use serde::Deserialize;

/// Prefix of the environment variables read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "NOTJS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Nested calls allowed before evaluation fails with
    /// [`RuntimeError::CallStackExceeded`](crate::interpreter::RuntimeError::CallStackExceeded)
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_call_depth: 256,
        }
    }
}

impl Config {
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// Defaults, overridden by `NOTJS_*` environment variables where set
    pub fn from_env() -> Self {
        Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Defaults, overridden by `source`. Settings that cannot be read are
    /// logged and the defaults are used instead.
    pub fn from_source<S>(source: S) -> Self
    where
        S: Source + Send + Sync + 'static,
    {
        Self::load(source).unwrap_or_else(|err| {
            warn!("ignoring invalid settings: {err}");
            Self::default()
        })
    }

    fn load<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        Settings::builder()
            .set_default("max_call_depth", defaults.max_call_depth as u64)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
