//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;

use env2conf::env;
use env2conf::format::Registry;

use crate::commands;

/// Variable read for configuration names when `--configs` is not given.
const LEGACY_CONFIGS_ENV: &str = "E2C_CONFIGS";

/// env2conf - Generate configuration files from environment variables
#[derive(Parser, Debug)]
#[command(name = "env2conf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Comma separated names of the configurations to generate
    #[arg(
        short,
        long,
        env = "ENV2CONF_CONFIGS",
        value_name = "NAMES",
        value_delimiter = ','
    )]
    configs: Vec<String>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Command to run once the configurations are written
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let environment = env::from_process();
        let names = resolve_config_names(&self.configs, &environment);
        debug!("Configurations: {:?}", names);

        commands::generate::execute(&names, &environment, &Registry::with_defaults())?;
        commands::run::execute(&self.command)
    }
}

/// Names given on the command line or in `ENV2CONF_CONFIGS`, falling back to
/// the older `E2C_CONFIGS` variable.
fn resolve_config_names(configs: &[String], environment: &env::Environment) -> Vec<String> {
    if !configs.is_empty() {
        return config_names(configs);
    }
    let legacy: Vec<String> = environment
        .get(LEGACY_CONFIGS_ENV)
        .map(|raw| raw.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    config_names(&legacy)
}

/// Trimmed names with blanks dropped, so `"a, b,"` yields `a` and `b`.
fn config_names(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
