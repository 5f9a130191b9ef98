//! The info and error loggers used by the consumer.
//!
//! [`LoggerFactory`] turns the `[logs]` section into a [`Loggers`] pair and a
//! [`LogGuard`] owning any opened files. Each logger fans its entries out
//! through a [`CompositeWriter`] to a file, the console, both, or nowhere.

mod factory;
mod logger;
mod writer;

pub use factory::{FactoryError, LogGuard, LoggerFactory, Loggers};
pub use logger::{Channel, Logger};
pub use writer::{CompositeWriter, Console, Destination, LogFile, compose};
