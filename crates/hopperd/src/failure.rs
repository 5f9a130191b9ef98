//! Failure values handed from the consumer to the exit handler.
//!
//! A [`Failure`] carries an optional explicit exit status and a message chain
//! stored innermost cause first. Wrapping a failure with [`Failure::context`]
//! appends the new message to the end of the chain.

use std::error::Error;
use std::fmt;
use std::num::NonZeroI32;

/// Exit status used when a failure does not request one explicitly.
pub const DEFAULT_EXIT_STATUS: i32 = 1;

/// Terminal error value produced by a consumer run.
///
/// `Failure` deliberately does not implement [`Error`] so that any error type
/// converts into it with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    status: Option<NonZeroI32>,
    messages: Vec<String>,
}

impl Failure {
    /// Creates a failure with a single message and the default exit status.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            messages: vec![message.into()],
        }
    }

    /// Creates a failure requesting a specific exit status.
    ///
    /// The message may be empty, in which case nothing is logged on exit. A
    /// status of `0` records no explicit status.
    #[must_use]
    pub fn exit(message: impl Into<String>, status: i32) -> Self {
        Self::new(message).with_status(status)
    }

    /// Captures an error and its `source()` chain, innermost cause first.
    #[must_use]
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut messages = Vec::new();
        let mut current = Some(error);
        while let Some(cause) = current {
            messages.push(cause.to_string());
            current = cause.source();
        }
        messages.reverse();
        Self {
            status: None,
            messages,
        }
    }

    /// Wraps the failure with an outer context message.
    #[must_use]
    pub fn context(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Sets the exit status requested by this failure.
    #[must_use]
    pub fn with_status(mut self, status: i32) -> Self {
        self.status = NonZeroI32::new(status);
        self
    }

    /// The explicitly requested exit status, if any.
    #[must_use]
    pub fn status(&self) -> Option<i32> {
        self.status.map(NonZeroI32::get)
    }

    /// The status the process should exit with.
    #[must_use]
    pub fn exit_status(&self) -> i32 {
        self.status().unwrap_or(DEFAULT_EXIT_STATUS)
    }

    /// The full message chain, innermost first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Non-empty messages in rendering order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Whether any message would be written on exit.
    #[must_use]
    pub fn has_message(&self) -> bool {
        self.lines().next().is_some()
    }

    /// Renders the chain one message per line, each newline-terminated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopperd::Failure;
    ///
    /// let failure = Failure::new("error").context("nested");
    /// assert_eq!(failure.render(), "error\nnested\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.lines().fold(String::new(), |mut rendered, line| {
            rendered.push_str(line);
            rendered.push('\n');
            rendered
        })
    }
}

/// Single-line form, outermost context first.
impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.messages.iter().rev().filter(|line| !line.is_empty());
        if let Some(first) = lines.next() {
            formatter.write_str(first)?;
        }
        for line in lines {
            write!(formatter, ": {line}")?;
        }
        Ok(())
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_error(&error)
    }
}

/// Adds context messages to fallible results.
pub trait ResultExt<T> {
    /// Converts the error into a [`Failure`] and wraps it with `message`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped failure when `self` is an error.
    fn context(self, message: impl Into<String>) -> Result<T, Failure>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Failure>,
{
    fn context(self, message: impl Into<String>) -> Result<T, Failure> {
        self.map_err(|error| {
            let failure: Failure = error.into();
            failure.context(message)
        })
    }
}
