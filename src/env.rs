//! Environment collection
//!
//! Helpers that turn the process environment into the plain string maps the
//! rest of the crate works with. Everything takes the environment as an
//! argument so tests can pass synthetic data instead of the real process
//! environment.

use std::collections::BTreeMap;

use log::debug;

/// Environment variables by name.
pub type Environment = BTreeMap<String, String>;

/// Prefix (after the configuration name) of option variables.
pub const OPTS_PREFIX: &str = "OPTS_";

/// Snapshot the current process environment
///
/// Entries whose name or value is not valid UTF-8 are skipped.
pub fn from_process() -> Environment {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                debug!("Skipping non UTF-8 environment entry {:?}", key);
                None
            }
        })
        .collect()
}

/// Keep variables named `{prefix}_*`, with the prefix stripped
///
/// The prefix comparison ignores ASCII case; the remainder keeps its case.
/// A variable that is exactly `{prefix}_` is ignored.
pub fn filter_env_prefix(prefix: &str, env: &Environment) -> Environment {
    let prefix = format!("{prefix}_");
    env.iter()
        .filter_map(|(key, value)| {
            let head = key.get(..prefix.len())?;
            let rest = &key[prefix.len()..];
            (head.eq_ignore_ascii_case(&prefix) && !rest.is_empty())
                .then(|| (rest.to_string(), value.clone()))
        })
        .collect()
}

/// Whether `key` names an option variable (`OPTS_*`, any case).
pub fn is_opts_key(key: &str) -> bool {
    strip_prefix_ignore_case(key, OPTS_PREFIX).is_some_and(|rest| !rest.is_empty())
}

/// Drop option variables, leaving only configuration values.
pub fn remove_env_opts(env: &mut Environment) {
    env.retain(|key, _| !is_opts_key(key));
}

/// `key` without `prefix`, comparing the prefix case-insensitively.
pub fn strip_prefix_ignore_case<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let head = key.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &key[prefix.len()..])
}
