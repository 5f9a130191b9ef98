//! Entry point for the hopper consumer daemon.

use std::io;
use std::process::ExitCode;

use hopperd::{NoopConsumer, ProcessTerminator};

fn main() -> ExitCode {
    let mut stderr = io::stderr().lock();
    hopperd::run(
        std::env::args_os(),
        &mut stderr,
        ProcessTerminator,
        &NoopConsumer,
    )
}
