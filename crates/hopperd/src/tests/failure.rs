//! Unit tests for failure values.

use std::io;

use rstest::rstest;
use thiserror::Error;

use crate::{DEFAULT_EXIT_STATUS, Failure, ResultExt};

#[derive(Debug, Error)]
#[error("outer operation failed")]
struct Outer {
    #[source]
    source: io::Error,
}

#[rstest]
fn new_failure_uses_default_status() {
    let failure = Failure::new("normal error");
    assert_eq!(failure.status(), None);
    assert_eq!(failure.exit_status(), DEFAULT_EXIT_STATUS);
    assert_eq!(failure.render(), "normal error\n");
}

#[rstest]
fn explicit_status_is_preserved() {
    let failure = Failure::exit("exit code error", 42);
    assert_eq!(failure.status(), Some(42));
    assert_eq!(failure.exit_status(), 42);
}

#[rstest]
fn zero_status_counts_as_unset() {
    let failure = Failure::exit("", 0);
    assert_eq!(failure.status(), None);
    assert_eq!(failure.exit_status(), DEFAULT_EXIT_STATUS);
}

#[rstest]
fn context_renders_innermost_first() {
    let failure = Failure::new("error").context("nested").context("outermost");
    assert_eq!(failure.render(), "error\nnested\noutermost\n");
    assert_eq!(failure.to_string(), "outermost: nested: error");
}

#[rstest]
fn empty_messages_are_skipped() {
    let failure = Failure::exit("", 3);
    assert!(!failure.has_message());
    assert_eq!(failure.render(), "");
    assert_eq!(failure.lines().count(), 0);
}

#[rstest]
fn source_chain_is_captured_innermost_first() {
    let error = Outer {
        source: io::Error::new(io::ErrorKind::NotFound, "queue missing"),
    };
    let failure = Failure::from(error);
    assert_eq!(
        failure.messages(),
        ["queue missing".to_owned(), "outer operation failed".to_owned()]
    );
}

#[rstest]
fn result_context_wraps_errors() {
    let result: Result<(), io::Error> = Err(io::Error::other("connection reset"));
    let failure = result
        .context("failed consuming queue")
        .expect_err("context keeps the error");
    assert_eq!(failure.render(), "connection reset\nfailed consuming queue\n");
    assert_eq!(failure.exit_status(), 1);
}

#[rstest]
fn result_context_keeps_status_of_existing_failures() {
    let result: Result<(), Failure> = Err(Failure::exit("command failed", 7));
    let failure = result.context("while acknowledging").expect_err("error");
    assert_eq!(failure.exit_status(), 7);
    assert_eq!(failure.render(), "command failed\nwhile acknowledging\n");
}
