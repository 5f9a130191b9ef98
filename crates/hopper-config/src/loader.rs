//! Configuration loading and the loader seam used by the daemon.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Config;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The file contents were not valid configuration.
    #[error("failed to parse configuration '{path}': {source}")]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: toml::de::Error,
    },
}

pub(crate) fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the daemon configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration cannot be produced.
    fn load(&self) -> Result<Config, ConfigError>;
}

/// Loader that reads a TOML file from disk.
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    /// Creates a loader for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config, ConfigError> {
        load_file(&self.path)
    }
}

/// Loader returning a fixed configuration, used when no file was given.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigLoader(Config);

impl StaticConfigLoader {
    /// Wraps an already-built configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self(config)
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, ConfigError> {
        Ok(self.0.clone())
    }
}
