//! The seam between the daemon and the message consumer.

use crate::failure::Failure;
use crate::logging::Loggers;

/// Consumes messages until it stops, reporting through `loggers`.
#[cfg_attr(test, mockall::automock)]
pub trait Consumer {
    /// Runs the consumer to completion.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] that ended the run. Its exit status and
    /// message chain decide how the process exits.
    fn consume(&self, loggers: &Loggers) -> Result<(), Failure>;
}

/// Placeholder used until a broker-backed consumer is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConsumer;

impl Consumer for NoopConsumer {
    fn consume(&self, loggers: &Loggers) -> Result<(), Failure> {
        loggers
            .info("no consumer configured; exiting")
            .map_err(|error| Failure::from(error).context("failed writing info log"))
    }
}
