//! Test suites for the daemon runtime.

mod failure;
mod support;
