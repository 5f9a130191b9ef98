//! Shared configuration for the hopper consumer daemon.
//!
//! The crate owns the structured values read from the daemon's TOML file.
//! Only the `[logs]` section is interpreted here; every other section belongs
//! to the consumer and is ignored so both can share one file.

mod defaults;
mod flag;
mod loader;
mod logs;

use std::path::Path;

use serde::Deserialize;

pub use defaults::DEFAULT_LOG_FILTER;
pub use flag::parse_flag;
pub use loader::{ConfigError, ConfigLoader, FileConfigLoader, StaticConfigLoader};
pub use logs::LogConfig;

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    logs: LogConfig,
}

impl Config {
    /// Builds a configuration around an existing `[logs]` section.
    #[must_use]
    pub const fn new(logs: LogConfig) -> Self {
        Self { logs }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML decoder error when the text is malformed or a
    /// recognised key holds a value of the wrong shape.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loader::load_file(path)
    }

    /// The `[logs]` section.
    #[must_use]
    pub const fn logs(&self) -> &LogConfig {
        &self.logs
    }

    /// Replaces the `[logs]` section, typically to apply CLI overrides.
    #[must_use]
    pub fn with_logs(mut self, logs: LogConfig) -> Self {
        self.logs = logs;
        self
    }
}
