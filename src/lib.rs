//! # env2conf
//!
//! Generate configuration files from environment variables. Each named
//! configuration picks up the variables that start with its name, builds a
//! document tree from their dotted keys, optionally merges that tree onto a
//! template, and writes it out as YAML, JSON, TOML or INI.
//!
//! ## Quick Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use env2conf::format::Registry;
//! use env2conf::merge::merge;
//!
//! let mut values = BTreeMap::new();
//! values.insert("server.port".to_string(), "8080".to_string());
//! values.insert("hosts.0".to_string(), "a".to_string());
//! values.insert("hosts.1".to_string(), "b".to_string());
//!
//! let tree = merge(None, &[], &values).unwrap();
//! let json = Registry::with_defaults().encode_to_string("json", &tree).unwrap();
//! assert!(json.contains("\"hosts\": ["));
//! ```
//!
//! ## Core Concepts
//!
//! - **Trees (`tree`)**: [`tree::Node`], the format-neutral document value.
//! - **Merging (`merge`)**: key path parsing, building trees from dotted keys,
//!   deleting paths from a template and turning digit-keyed maps into
//!   sequences.
//! - **Formats (`format`)**: the [`format::Codec`] trait and the
//!   [`format::Registry`] mapping format names to codecs.
//! - **Environment (`env`)**: collecting and filtering environment variables.
//! - **Configurations (`config`)**: reading a named configuration from the
//!   environment and writing its output file.
//! - **Errors (`error`)**: the crate-wide [`error::Error`] type.

pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod merge;
pub mod tree;

#[cfg(test)]
mod keypath_proptest;
