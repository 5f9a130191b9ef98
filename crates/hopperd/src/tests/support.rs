//! Shared doubles for the runtime tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::Terminator;
use crate::logging::{Channel, CompositeWriter, Console, Destination, Logger, LoggerFactory};

/// In-memory stream standing in for stdout or stderr.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub(crate) fn destination(&self) -> Arc<dyn Destination> {
        Arc::new(Console::new(self.clone()))
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console pair captured by a [`LoggerFactory`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Consoles {
    pub(crate) info: SharedBuffer,
    pub(crate) error: SharedBuffer,
}

impl Consoles {
    pub(crate) fn factory(&self) -> LoggerFactory {
        LoggerFactory::with_consoles(self.info.destination(), self.error.destination())
    }
}

/// Logger writing to an in-memory buffer.
pub(crate) fn buffer_logger(channel: Channel, timestamps: bool) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = CompositeWriter::discard().with_destination(buffer.destination());
    (Logger::new(channel, writer, timestamps), buffer)
}

/// Terminator recording requested exit codes instead of exiting.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingTerminator {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingTerminator {
    pub(crate) fn codes(&self) -> Vec<i32> {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(code);
    }
}

/// Destination that rejects every entry.
#[derive(Debug, Default)]
pub(crate) struct FailingDestination;

impl Destination for FailingDestination {
    fn write_entry(&self, _entry: &[u8]) -> io::Result<()> {
        Err(io::Error::other("destination unavailable"))
    }
}

/// Whether `line` starts with a `YYYY/MM/DD hh:mm:ss ` prefix.
pub(crate) fn has_timestamp_prefix(line: &str) -> bool {
    const PATTERN: &[u8] = b"dddd/dd/dd dd:dd:dd ";
    let bytes = line.as_bytes();
    bytes.len() >= PATTERN.len()
        && PATTERN
            .iter()
            .zip(bytes)
            .all(|(expected, actual)| match expected {
                b'd' => actual.is_ascii_digit(),
                other => other == actual,
            })
}

/// Whether `line` contains a date/time stamp anywhere.
pub(crate) fn contains_timestamp(text: &str) -> bool {
    text.char_indices()
        .any(|(index, _)| text.get(index..).is_some_and(has_timestamp_prefix))
}
