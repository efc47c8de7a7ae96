//! Generate command implementation
//!
//! Writes every named configuration. One configuration failing does not stop
//! the others; all failures are reported together at the end.

use anyhow::{bail, Result};
use log::info;

use env2conf::config::write_configs;
use env2conf::env::Environment;
use env2conf::format::Registry;

/// Write the configurations in `names`, reading their settings from `env`
pub fn execute(names: &[String], env: &Environment, registry: &Registry) -> Result<()> {
    if names.is_empty() {
        info!("No configurations requested");
        return Ok(());
    }

    let errors: Vec<String> = write_configs(names, env, registry)
        .into_iter()
        .filter_map(|result| result.err())
        .map(|err| err.to_string())
        .collect();

    if !errors.is_empty() {
        bail!("Failed to generate configs:\n\n{}", errors.join("\n\n"));
    }
    info!("Generated {} configuration(s)", names.len());
    Ok(())
}
