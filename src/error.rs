//! # Error Handling
//!
//! This module defines the centralized error type for `env2conf`. It uses the
//! `thiserror` library to describe every failure mode of configuration
//! generation with a readable message.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum covering configuration naming, missing
//!   environment variables, codec failures, array normalization and I/O.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Key path parsing, type collisions while building a tree, and deletes of
//! paths that do not exist never produce an error. The only error the merge
//! engine itself can raise is [`Error::Normalize`], which points at a bug in
//! how keys were constructed upstream.

use thiserror::Error;

/// Main error type for env2conf operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration was requested with an empty name.
    #[error("Config name is required")]
    NameRequired,

    /// A configuration name contained something other than letters or digits.
    #[error("Config names must only use letters or numbers: {name:?}")]
    InvalidName { name: String },

    /// One or more environment variables needed by a configuration are unset.
    ///
    /// Names are reported sorted so the message is stable.
    #[error("Missing required environment variables: {}", names.join(", "))]
    MissingEnv { names: Vec<String> },

    /// No codec is registered for the requested format.
    #[error("Unsupported file format: {format:?}")]
    UnsupportedFormat { format: String },

    /// A digit-keyed map could not be turned into a sequence.
    ///
    /// This is an internal invariant violation: keys built from sequential
    /// numbering always normalize.
    #[error("Array normalization failed at '{path}': {message}")]
    Normalize { path: String, message: String },

    /// A codec could not represent or parse a document.
    #[error("{format} codec error: {message}")]
    Codec { format: String, message: String },

    /// Generating a named configuration failed.
    #[error("{name}: {source}")]
    Config {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// Reading a template or writing an output file failed.
    #[error("Failed to access {}: {source}", path.display())]
    File {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// A TOML serialization error, wrapped from `toml::ser::Error`.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// An INI parsing error, wrapped from `ini::ParseError`.
    #[error("INI parsing error: {0}")]
    Ini(#[from] ini::ParseError),
}

impl Error {
    /// Attach the configuration name to an error.
    pub fn in_config(self, name: impl Into<String>) -> Self {
        Error::Config {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
