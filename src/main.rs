//! # env2conf CLI
//!
//! This is the binary entry point for the `env2conf` command-line tool.
//!
//! It parses arguments with `clap`, writes the requested configurations and
//! then runs the trailing command, if any, exiting with that command's code.
//!
//! The generation logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
