//! Fan-out writers over log files and console streams.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A byte sink that accepts whole log entries.
///
/// Implementations serialise writes internally so an entry is never split
/// by a concurrent writer.
pub trait Destination: Send + Sync {
    /// Writes and flushes one complete entry.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the entry cannot be delivered.
    fn write_entry(&self, entry: &[u8]) -> io::Result<()>;
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Console stream destination such as stdout or stderr.
pub struct Console<W> {
    stream: Mutex<W>,
}

impl<W> Console<W> {
    /// Wraps a stream.
    #[must_use]
    pub const fn new(stream: W) -> Self {
        Self {
            stream: Mutex::new(stream),
        }
    }
}

impl<W> fmt::Debug for Console<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Console").finish_non_exhaustive()
    }
}

impl<W: Write + Send> Destination for Console<W> {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        let mut stream = lock(&self.stream);
        stream.write_all(entry)?;
        stream.flush()
    }
}

/// A log file opened in create-or-append mode.
///
/// Clones share the same handle. [`LogFile::close`] releases it for every
/// clone; later writes fail instead of reopening the file.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    handle: Arc<Mutex<Option<File>>>,
}

impl LogFile {
    /// Opens `path` for appending, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns the IO error reported by the operating system.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            handle: Arc::new(Mutex::new(Some(file))),
        })
    }

    /// Path the file was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closes the handle. Calling this more than once has no effect.
    pub fn close(&self) {
        drop(lock(&self.handle).take());
    }

    /// Whether [`LogFile::close`] has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        lock(&self.handle).is_none()
    }
}

impl Destination for LogFile {
    fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        let mut handle = lock(&self.handle);
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("log file '{}' is closed", self.path.display()),
            ));
        };
        file.write_all(entry)?;
        file.flush()
    }
}

/// Writer delivering each entry to zero or more destinations in order.
///
/// With no destinations every write succeeds and discards its input. A
/// failing destination stops delivery and the error is returned; entries
/// already written to earlier destinations are left in place.
#[derive(Clone, Default)]
pub struct CompositeWriter {
    destinations: Vec<Arc<dyn Destination>>,
}

impl CompositeWriter {
    /// A writer with no destinations.
    #[must_use]
    pub const fn discard() -> Self {
        Self {
            destinations: Vec::new(),
        }
    }

    /// Adds a destination after the existing ones.
    #[must_use]
    pub fn with_destination(mut self, destination: Arc<dyn Destination>) -> Self {
        self.destinations.push(destination);
        self
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether writes are discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Delivers `entry` to every destination.
    ///
    /// # Errors
    ///
    /// Returns the first destination error encountered.
    pub fn write_entry(&self, entry: &[u8]) -> io::Result<()> {
        self.destinations
            .iter()
            .try_for_each(|destination| destination.write_entry(entry))
    }
}

impl fmt::Debug for CompositeWriter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CompositeWriter")
            .field("destinations", &self.destinations.len())
            .finish()
    }
}

/// Builds the writer for one channel.
///
/// | path | verbose | destinations |
/// |------|---------|--------------|
/// | none | off     | none         |
/// | none | on      | console      |
/// | set  | off     | file         |
/// | set  | on      | file, console |
///
/// The opened file, if any, is returned so the caller can own its lifetime.
///
/// # Errors
///
/// Returns the IO error raised while opening the file.
pub fn compose(
    path: Option<&Path>,
    verbose: bool,
    console: &Arc<dyn Destination>,
) -> io::Result<(CompositeWriter, Option<LogFile>)> {
    let mut writer = CompositeWriter::discard();
    let file = match path {
        Some(path) => {
            let file = LogFile::open(path)?;
            writer = writer.with_destination(Arc::new(file.clone()));
            Some(file)
        }
        None => None,
    };
    if verbose {
        writer = writer.with_destination(Arc::clone(console));
    }
    Ok((writer, file))
}
