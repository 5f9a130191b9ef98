//! Translates the consumer's terminal failure into an exit status.

use crate::failure::{DEFAULT_EXIT_STATUS, Failure};
use crate::logging::Logger;

const EXIT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::exit");

/// The irreversible "stop the process" action.
pub trait Terminator: Send + Sync {
    /// Requests termination with `code`.
    fn terminate(&self, code: i32);
}

/// Terminator that exits the current process.
///
/// Statuses outside `0..=255` are reported as [`DEFAULT_EXIT_STATUS`], since
/// the operating system would otherwise truncate them (256 would exit 0).
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessTerminator;

impl ProcessTerminator {
    /// The status actually passed to the operating system for `code`.
    #[must_use]
    pub fn process_status(code: i32) -> i32 {
        if (0..=255).contains(&code) {
            code
        } else {
            DEFAULT_EXIT_STATUS
        }
    }
}

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32) {
        std::process::exit(Self::process_status(code));
    }
}

/// Logs a failure's message chain and requests termination.
#[derive(Debug)]
pub struct ExitHandler<T> {
    logger: Logger,
    terminator: T,
}

impl<T> ExitHandler<T>
where
    T: Terminator,
{
    /// Creates a handler writing diagnostics to `logger`.
    #[must_use]
    pub const fn new(logger: Logger, terminator: T) -> Self {
        Self { logger, terminator }
    }

    /// Exit status for `failure` without side effects: `0` when absent,
    /// otherwise the requested status or `1`.
    #[must_use]
    pub fn code_for(failure: Option<&Failure>) -> i32 {
        failure.map_or(0, Failure::exit_status)
    }

    /// Handles the outcome of a run.
    ///
    /// Nothing happens when `failure` is `None`. Otherwise each non-empty
    /// message is logged, innermost first, and termination is requested
    /// with the failure's exit status. A log write failure does not prevent
    /// termination.
    pub fn handle(&self, failure: Option<&Failure>) {
        let Some(failure) = failure else {
            return;
        };

        if let Err(error) = self.logger.log_failure(failure) {
            tracing::warn!(
                target: EXIT_TARGET,
                %error,
                "failed to write exit diagnostic"
            );
        }

        let code = failure.exit_status();
        tracing::debug!(target: EXIT_TARGET, code, "terminating");
        self.terminator.terminate(code);
    }
}
