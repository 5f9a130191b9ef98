//! Runtime core of the hopper consumer daemon.
//!
//! The daemon loads its configuration, builds an info and an error
//! [`Logger`] from the `[logs]` section, runs the [`Consumer`], and hands any
//! terminal [`Failure`] to the [`ExitHandler`], which logs the message chain
//! and terminates with the requested status.
//!
//! The termination action sits behind [`Terminator`] so the whole sequence
//! can run in tests without ending the test process.

mod cli;
mod consumer;
mod exit;
mod failure;
pub mod logging;
mod telemetry;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

pub use cli::Cli;
pub use consumer::{Consumer, NoopConsumer};
pub use exit::{ExitHandler, ProcessTerminator, Terminator};
pub use failure::{DEFAULT_EXIT_STATUS, Failure, ResultExt};
pub use logging::{Channel, FactoryError, LogGuard, Logger, LoggerFactory, Loggers};
pub use telemetry::{TelemetryError, TelemetryHandle};

const BOOTSTRAP_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::bootstrap");

/// Runs the daemon with the process console streams.
///
/// Startup errors (arguments, configuration, telemetry, log files) are
/// written to `stderr` because no logger exists yet to report them.
pub fn run<I, E, T, C>(args: I, stderr: &mut E, terminator: T, consumer: &C) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    E: Write,
    T: Terminator,
    C: Consumer + ?Sized,
{
    run_with_factory(args, stderr, &LoggerFactory::new(), terminator, consumer)
}

/// Runs the daemon using `factory` to build the loggers.
pub fn run_with_factory<I, E, T, C>(
    args: I,
    stderr: &mut E,
    factory: &LoggerFactory,
    terminator: T,
    consumer: &C,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    E: Write,
    T: Terminator,
    C: Consumer + ?Sized,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = write!(stderr, "{}", error.render());
            return exit_code(error.exit_code());
        }
    };

    let (loggers, guard) = match start(&cli, factory) {
        Ok(started) => started,
        Err(message) => {
            let _ = writeln!(stderr, "{message}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = consumer.consume(&loggers);
    let failure = outcome.err();
    let handler = ExitHandler::new(exit_logger(&loggers, factory), terminator);
    // Log files are unbuffered, so terminating before the guard drops loses
    // no entries.
    handler.handle(failure.as_ref());
    drop(guard);
    exit_code(ExitHandler::<T>::code_for(failure.as_ref()))
}

fn start(cli: &Cli, factory: &LoggerFactory) -> Result<(Loggers, LogGuard), String> {
    telemetry::initialise(cli.log_filter()).map_err(|error| error.to_string())?;
    let config = cli.load_config().map_err(|error| error.to_string())?;
    tracing::info!(
        target: BOOTSTRAP_TARGET,
        config_path = ?cli.config_path(),
        verbose = config.logs().verbose(),
        "configuration loaded"
    );
    factory.build(config.logs()).map_err(|error| error.to_string())
}

/// The error channel, or the error console when the channel discards, so a
/// terminal failure is always reported somewhere.
fn exit_logger(loggers: &Loggers, factory: &LoggerFactory) -> Logger {
    let logger = loggers.error_logger();
    if logger.is_discarding() {
        factory.fallback_error_logger(logger.has_timestamps())
    } else {
        logger.clone()
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod tests;
