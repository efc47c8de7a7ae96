//! Run command implementation
//!
//! Starts the command given after the options with the terminal's stdin,
//! stdout and stderr, waits for it, and passes its exit code on.

use std::process::{Command, ExitCode, ExitStatus};

use anyhow::{Context, Result};
use log::debug;

/// Run `command` (program followed by its arguments) to completion
///
/// An empty command does nothing and succeeds.
pub fn execute(command: &[String]) -> Result<ExitCode> {
    run(command).map(ExitCode::from)
}

fn run(command: &[String]) -> Result<u8> {
    let Some((program, args)) = command.split_first() else {
        return Ok(0);
    };

    debug!("Running {} {:?}", program, args);
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;
    debug!("{} exited with {}", program, status);

    Ok(exit_code(status))
}

/// Exit code to report for a finished child; killed children map to 1.
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .map_or(1, |code| u8::try_from(code).unwrap_or(1))
}
