//! Builds the info and error loggers from the `[logs]` configuration.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hopper_config::LogConfig;
use thiserror::Error;

use crate::failure::Failure;

use super::logger::{Channel, Logger};
use super::writer::{CompositeWriter, Console, Destination, LogFile, compose};

const LOGGING_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::logging");

/// A log file could not be opened.
#[derive(Debug, Error)]
#[error("failed creating {channel} log: open {}: {source}", .path.display())]
pub struct FactoryError {
    channel: Channel,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl FactoryError {
    fn new(channel: Channel, path: Option<&Path>, source: io::Error) -> Self {
        Self {
            channel,
            path: path.map(Path::to_path_buf).unwrap_or_default(),
            source,
        }
    }

    /// Channel whose file failed to open.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Path that failed to open.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The pair of loggers handed to the consumer.
#[derive(Debug, Clone)]
pub struct Loggers {
    info: Logger,
    error: Logger,
}

impl Loggers {
    /// Pairs an info and an error logger.
    #[must_use]
    pub const fn new(info: Logger, error: Logger) -> Self {
        Self { info, error }
    }

    /// Loggers that discard everything.
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Logger::discard(Channel::Info), Logger::discard(Channel::Error))
    }

    /// The informational channel.
    #[must_use]
    pub const fn info_logger(&self) -> &Logger {
        &self.info
    }

    /// The error channel.
    #[must_use]
    pub const fn error_logger(&self) -> &Logger {
        &self.error
    }

    /// Writes an informational entry.
    ///
    /// # Errors
    ///
    /// Returns the first destination failure.
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.info.log(message)
    }

    /// Writes a failure's message chain to the error channel.
    ///
    /// # Errors
    ///
    /// Returns the first destination failure.
    pub fn error(&self, failure: &Failure) -> io::Result<()> {
        self.error.log_failure(failure)
    }
}

/// Owns the log files opened by [`LoggerFactory::build`].
///
/// Dropping the guard closes them. [`LogGuard::close`] may be called any
/// number of times.
#[derive(Debug, Default)]
#[must_use = "dropping the guard closes the log files"]
pub struct LogGuard {
    files: Vec<LogFile>,
}

impl LogGuard {
    fn track(&mut self, file: Option<LogFile>) {
        self.files.extend(file);
    }

    /// Files held open by this guard.
    #[must_use]
    pub fn files(&self) -> &[LogFile] {
        &self.files
    }

    /// Closes every opened file.
    pub fn close(&self) {
        for file in &self.files {
            file.close();
        }
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        self.close();
    }
}

/// Resolves log configuration into a [`Loggers`] pair.
#[derive(Clone)]
pub struct LoggerFactory {
    info_console: Arc<dyn Destination>,
    error_console: Arc<dyn Destination>,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::with_consoles(
            Arc::new(Console::new(io::stdout())),
            Arc::new(Console::new(io::stderr())),
        )
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("LoggerFactory").finish_non_exhaustive()
    }
}

impl LoggerFactory {
    /// Factory echoing info entries to stdout and error entries to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory using the supplied console destinations in verbose mode.
    #[must_use]
    pub fn with_consoles(
        info_console: Arc<dyn Destination>,
        error_console: Arc<dyn Destination>,
    ) -> Self {
        Self {
            info_console,
            error_console,
        }
    }

    /// Error logger writing only to the error console.
    ///
    /// Used to report terminal failures when the configured error channel
    /// discards its input.
    #[must_use]
    pub fn fallback_error_logger(&self, timestamps: bool) -> Logger {
        let writer = CompositeWriter::discard().with_destination(Arc::clone(&self.error_console));
        Logger::new(Channel::Error, writer, timestamps)
    }

    /// Builds both loggers.
    ///
    /// The error channel is resolved first. If the info file then fails to
    /// open, the already-opened error file is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] naming the channel whose file could not be
    /// opened.
    pub fn build(&self, config: &LogConfig) -> Result<(Loggers, LogGuard), FactoryError> {
        let timestamps = !config.no_date_time();
        let mut guard = LogGuard::default();

        let error = self.channel(Channel::Error, config.error_path(), config, &mut guard)?;
        let info = self.channel(Channel::Info, config.info_path(), config, &mut guard)?;

        tracing::debug!(
            target: LOGGING_TARGET,
            error_destinations = error.len(),
            info_destinations = info.len(),
            timestamps,
            "log destinations resolved"
        );

        let loggers = Loggers::new(
            Logger::new(Channel::Info, info, timestamps),
            Logger::new(Channel::Error, error, timestamps),
        );
        Ok((loggers, guard))
    }

    fn channel(
        &self,
        channel: Channel,
        path: Option<&Path>,
        config: &LogConfig,
        guard: &mut LogGuard,
    ) -> Result<CompositeWriter, FactoryError> {
        let console = match channel {
            Channel::Info => &self.info_console,
            Channel::Error => &self.error_console,
        };
        let (writer, file) = compose(path, config.verbose(), console)
            .map_err(|source| FactoryError::new(channel, path, source))?;
        guard.track(file);
        Ok(writer)
    }
}
