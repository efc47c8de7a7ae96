//! # CLI Command Implementations
//!
//! The `env2conf` binary does two things in order: it writes every configured
//! document, then it optionally runs a child command. Each step lives in its
//! own module with an `execute` function that the CLI calls.
//!
//! - `generate`: write all named configurations, reporting every failure.
//! - `run`: start the child command and hand back its exit code.

pub mod generate;
pub mod run;
