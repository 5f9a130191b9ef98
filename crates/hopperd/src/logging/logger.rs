//! Severity channels bound to a composite writer.

use std::io;
use std::sync::Arc;

use strum::{Display, EnumString};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::failure::Failure;

use super::writer::CompositeWriter;

/// The two independent logging channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Channel {
    /// Informational feedback.
    Info,
    /// Failures and diagnostics.
    Error,
}

/// A named channel writing timestamped lines to a [`CompositeWriter`].
///
/// Clones share the same writer, so a logger can be handed to many worker
/// threads. Each entry is written in a single call, which keeps concurrent
/// entries from interleaving within a line.
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

#[derive(Debug)]
struct LoggerInner {
    channel: Channel,
    writer: CompositeWriter,
    timestamps: bool,
}

impl Logger {
    /// Creates a logger. When `timestamps` is set every entry starts with a
    /// `YYYY/MM/DD hh:mm:ss` prefix.
    #[must_use]
    pub fn new(channel: Channel, writer: CompositeWriter, timestamps: bool) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                channel,
                writer,
                timestamps,
            }),
        }
    }

    /// A logger that discards every entry.
    #[must_use]
    pub fn discard(channel: Channel) -> Self {
        Self::new(channel, CompositeWriter::discard(), true)
    }

    /// The channel this logger writes.
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.inner.channel
    }

    /// Whether entries carry a date/time prefix.
    #[must_use]
    pub fn has_timestamps(&self) -> bool {
        self.inner.timestamps
    }

    /// Whether entries are discarded.
    #[must_use]
    pub fn is_discarding(&self) -> bool {
        self.inner.writer.is_empty()
    }

    /// Writes one entry, appending a newline when `message` lacks one.
    ///
    /// # Errors
    ///
    /// Returns the first destination failure.
    pub fn log(&self, message: &str) -> io::Result<()> {
        let entry = self.format_entry(message)?;
        self.inner.writer.write_entry(entry.as_bytes())
    }

    /// Writes the failure's message chain, one entry per line.
    ///
    /// Messages spanning several lines are split so every line gets its own
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns the first destination failure; later lines are not attempted.
    pub fn log_failure(&self, failure: &Failure) -> io::Result<()> {
        failure
            .lines()
            .flat_map(str::lines)
            .try_for_each(|line| self.log(line))
    }

    fn format_entry(&self, message: &str) -> io::Result<String> {
        let mut entry = String::with_capacity(message.len() + TIMESTAMP_WIDTH + 1);
        if self.inner.timestamps {
            entry.push_str(&timestamp()?);
            entry.push(' ');
        }
        entry.push_str(message);
        if !message.ends_with('\n') {
            entry.push('\n');
        }
        Ok(entry)
    }
}

const TIMESTAMP_WIDTH: usize = "YYYY/MM/DD hh:mm:ss".len();

/// Current local time as `YYYY/MM/DD hh:mm:ss`, falling back to UTC when the
/// local offset cannot be determined.
fn timestamp() -> io::Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!(
        "[year]/[month]/[day] [hour]:[minute]:[second]"
    ))
    .map_err(io::Error::other)
}
