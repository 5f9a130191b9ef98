//! Command-line arguments for the daemon.

use std::path::PathBuf;

use clap::Parser;
use hopper_config::{
    Config, ConfigError, ConfigLoader, DEFAULT_LOG_FILTER, FileConfigLoader, StaticConfigLoader,
};

/// Arguments accepted by `hopperd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hopperd",
    version,
    about = "Consume queued messages and hand each one to a command"
)]
pub struct Cli {
    /// TOML configuration file. Without it the built-in defaults apply.
    #[arg(short = 'c', long = "config-path", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Echo log entries to the console regardless of the configuration.
    #[arg(short = 'v', long)]
    verbose: bool,
    /// Filter for the daemon's own diagnostics, in `RUST_LOG` syntax.
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

impl Cli {
    /// The configuration file, if one was given.
    #[must_use]
    pub fn config_path(&self) -> Option<&std::path::Path> {
        self.config_path.as_deref()
    }

    /// Whether `--verbose` was passed.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// The diagnostics filter.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Loads the configuration and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`ConfigError`].
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config_path {
            Some(path) => FileConfigLoader::new(path).load()?,
            None => StaticConfigLoader::default().load()?,
        };
        if self.verbose {
            let logs = config.logs().clone().with_verbose(true);
            return Ok(config.with_logs(logs));
        }
        Ok(config)
    }
}
