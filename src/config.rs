//! # Named Configurations
//!
//! A named configuration describes one output document. Everything about it
//! comes from environment variables that start with the configuration name:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `NAME_OPTS_FILE` | output path (required) |
//! | `NAME_OPTS_FORMAT` | output format (required) |
//! | `NAME_OPTS_TEMPLATE_FILE` | template document to start from |
//! | `NAME_OPTS_TEMPLATE_FORMAT` | template format, defaults to the output format |
//! | `NAME_OPTS_IN_<key>=VAR` | set `<key>` to the value of `VAR` |
//! | `NAME_OPTS_DELETE_<key>` | remove `<key>` from the template |
//! | `NAME_<key>=value` | set `<key>` to `value` |
//!
//! The `NAME_` prefix and the `OPTS_` markers are matched without regard to
//! case; `<key>` is used exactly as written.
//!
//! ## Generation
//!
//! [`Config::render`] decodes the template, applies deletes and values with
//! [`merge`](crate::merge::merge) and returns the tree.
//! [`Config::write`] encodes that tree and writes the output file.
//! [`write_configs`] does this for several configurations in parallel.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::env::{
    filter_env_prefix, remove_env_opts, strip_prefix_ignore_case, Environment, OPTS_PREFIX,
};
use crate::error::{Error, Result};
use crate::format::Registry;
use crate::merge::merge;
use crate::tree::Node;

/// `OPTS_PREFIX` without its trailing underscore, for [`filter_env_prefix`].
const OPTS_MARKER: &str = "OPTS";

/// Options of a named configuration, read from `NAME_OPTS_*` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Where the generated document is written.
    pub file: PathBuf,
    /// Format name of the generated document.
    pub format: String,
    /// Document to merge values onto.
    pub template_file: Option<PathBuf>,
    /// Format of `template_file`, when it differs from `format`.
    pub template_format: Option<String>,
    /// Keys whose value is read from another environment variable.
    pub inputs: BTreeMap<String, String>,
    /// Keys to remove from the template.
    pub deletes: Vec<String>,
}

impl Opts {
    /// Format used to decode the template.
    pub fn template_format(&self) -> &str {
        self.template_format.as_deref().unwrap_or(&self.format)
    }
}

/// A named configuration and the values it sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lowercased configuration name.
    pub name: String,
    pub opts: Opts,
    /// Dotted keys and their values.
    pub values: BTreeMap<String, String>,
}

impl Config {
    /// Read the configuration `name` from `env`
    ///
    /// # Errors
    ///
    /// - [`Error::NameRequired`] / [`Error::InvalidName`] for a bad name.
    /// - [`Error::MissingEnv`] listing every unset required option and every
    ///   unset variable named by an `OPTS_IN_` mapping.
    pub fn from_env(name: &str, env: &Environment) -> Result<Config> {
        let name = validate_name(name)?;
        let mut values = filter_env_prefix(&name, env);
        let options = filter_env_prefix(OPTS_MARKER, &values);
        remove_env_opts(&mut values);

        let mut opts = Opts::default();
        let mut file = None;
        let mut format = None;

        for (option, value) in options {
            if let Some(target) = strip_prefix_ignore_case(&option, "IN_") {
                opts.inputs.insert(target.to_string(), value);
            } else if let Some(target) = strip_prefix_ignore_case(&option, "DELETE_") {
                opts.deletes.push(target.to_string());
            } else {
                match option.to_ascii_uppercase().as_str() {
                    "FILE" => file = non_empty(value),
                    "FORMAT" => format = non_empty(value).map(|f| f.to_ascii_lowercase()),
                    "TEMPLATE_FILE" => opts.template_file = non_empty(value).map(PathBuf::from),
                    "TEMPLATE_FORMAT" => {
                        opts.template_format = non_empty(value).map(|f| f.to_ascii_lowercase())
                    }
                    _ => warn!("{}: ignoring unknown option {}{}", name, OPTS_PREFIX, option),
                }
            }
        }

        let upper = name.to_ascii_uppercase();
        let mut missing = Vec::new();
        match file {
            Some(file) => opts.file = PathBuf::from(file),
            None => missing.push(format!("{upper}_OPTS_FILE")),
        }
        match format {
            Some(format) => opts.format = format,
            None => missing.push(format!("{upper}_OPTS_FORMAT")),
        }
        for (key, var) in &opts.inputs {
            match env.get(var) {
                Some(value) => {
                    values.insert(key.clone(), value.clone());
                }
                None => missing.push(var.clone()),
            }
        }

        if !missing.is_empty() {
            missing.sort();
            missing.dedup();
            return Err(Error::MissingEnv { names: missing });
        }

        debug!(
            "{}: {} values, {} deletes, template {:?}",
            name,
            values.len(),
            opts.deletes.len(),
            opts.template_file
        );
        Ok(Config { name, opts, values })
    }

    /// Decode the template (if any) and merge deletes and values onto it.
    pub fn render(&self, registry: &Registry) -> Result<Node> {
        let template = match &self.opts.template_file {
            Some(path) => load_template(registry, self.opts.template_format(), path)?,
            None => None,
        };
        merge(template, &self.opts.deletes, &self.values)
    }

    /// Render the configuration and write it to its output file
    ///
    /// The document is fully encoded before the file is touched, so an
    /// encoding error leaves any existing file in place.
    pub fn write(&self, registry: &Registry) -> Result<()> {
        let tree = self.render(registry)?;
        let mut buffer = Vec::new();
        registry.encode(&self.opts.format, &tree, &mut buffer)?;

        fs::write(&self.opts.file, buffer).map_err(|source| Error::File {
            path: self.opts.file.clone(),
            source,
        })?;
        info!(
            "{}: wrote {} to {}",
            self.name,
            self.opts.format,
            self.opts.file.display()
        );
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.to_lowercase();
    if name.is_empty() {
        return Err(Error::NameRequired);
    }
    if !name.chars().all(char::is_alphanumeric) {
        return Err(Error::InvalidName { name });
    }
    Ok(name)
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn load_template(registry: &Registry, format: &str, path: &Path) -> Result<Option<Node>> {
    let file_error = |source| Error::File {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::open(path).map_err(file_error)?;
    let template = registry.decode(format, &mut file)?;
    debug!("Loaded {} template {}", format, path.display());

    // An empty document decodes to null; treat it like no template.
    Ok(match template {
        Node::Null => None,
        other => Some(other),
    })
}

/// Generate and write every named configuration
///
/// Configurations are independent, so they are generated in parallel. The
/// result for each name is returned in the order given, with errors tagged
/// by configuration name.
pub fn write_configs(
    names: &[String],
    env: &Environment,
    registry: &Registry,
) -> Vec<Result<Config>> {
    names
        .par_iter()
        .map(|name| -> Result<Config> {
            let config =
                Config::from_env(name, env).map_err(|err| err.in_config(name.to_lowercase()))?;
            config
                .write(registry)
                .map_err(|err| err.in_config(config.name.clone()))?;
            Ok(config)
        })
        .collect()
}
