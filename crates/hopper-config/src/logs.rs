//! The `[logs]` configuration section.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::flag::{deserialize_flag, deserialize_path, non_empty_path};

/// Destinations and formatting for the info and error loggers.
///
/// Both paths are optional. Without paths and without `verbose` the loggers
/// discard everything, which is a valid configuration rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    #[serde(default, deserialize_with = "deserialize_path")]
    error: Option<PathBuf>,
    #[serde(default, deserialize_with = "deserialize_path")]
    info: Option<PathBuf>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    verbose: bool,
    #[serde(default, rename = "nodatetime", deserialize_with = "deserialize_flag")]
    no_date_time: bool,
}

impl LogConfig {
    /// File receiving error entries, if any.
    #[must_use]
    pub fn error_path(&self) -> Option<&Path> {
        self.error.as_deref()
    }

    /// File receiving informational entries, if any.
    #[must_use]
    pub fn info_path(&self) -> Option<&Path> {
        self.info.as_deref()
    }

    /// Whether entries are echoed to the console.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether the date/time prefix is suppressed.
    #[must_use]
    pub const fn no_date_time(&self) -> bool {
        self.no_date_time
    }

    /// Sets the error log path. An empty path disables the file.
    #[must_use]
    pub fn with_error_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.error = non_empty_path(path);
        self
    }

    /// Sets the info log path. An empty path disables the file.
    #[must_use]
    pub fn with_info_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.info = non_empty_path(path);
        self
    }

    /// Enables or disables console output.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables or disables the date/time prefix suppression.
    #[must_use]
    pub const fn with_no_date_time(mut self, no_date_time: bool) -> Self {
        self.no_date_time = no_date_time;
        self
    }
}
