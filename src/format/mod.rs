//! Document codecs
//!
//! A [`Codec`] reads a configuration document into a [`Node`] tree and
//! writes a tree back out. Codecs are looked up by format name through a
//! [`Registry`], which callers build once and pass to whatever needs it.
//!
//! ## Supported Formats
//!
//! - YAML (yaml.rs) - registered as `yaml` and `yml`
//! - JSON (json.rs)
//! - TOML (toml.rs)
//! - INI (ini.rs) - nested maps become dotted section names

pub mod ini;
pub mod json;
pub mod toml;
pub mod yaml;

use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::tree::Node;

/// Encode and decode one document format.
pub trait Codec: Send + Sync {
    /// Serialize `value` and write it to `writer`.
    fn encode(&self, value: &Node, writer: &mut dyn Write) -> Result<()>;

    /// Read a whole document from `reader`.
    fn decode(&self, reader: &mut dyn Read) -> Result<Node>;
}

/// Codecs by format name.
#[derive(Default)]
pub struct Registry {
    codecs: BTreeMap<String, Box<dyn Codec>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the YAML, JSON, TOML and INI codecs.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("yaml", yaml::YamlCodec);
        registry.register("yml", yaml::YamlCodec);
        registry.register("json", json::JsonCodec);
        registry.register("toml", toml::TomlCodec);
        registry.register("ini", ini::IniCodec);
        registry
    }

    /// Register `codec` under `format`, replacing any previous codec.
    pub fn register(&mut self, format: impl Into<String>, codec: impl Codec + 'static) {
        self.codecs.insert(format.into(), Box::new(codec));
    }

    fn codec(&self, format: &str) -> Result<&dyn Codec> {
        self.codecs
            .get(format)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| Error::UnsupportedFormat {
                format: format.to_string(),
            })
    }

    /// Encode `value` as `format`.
    pub fn encode(&self, format: &str, value: &Node, writer: &mut dyn Write) -> Result<()> {
        self.codec(format)?.encode(value, writer)
    }

    /// Decode a `format` document.
    pub fn decode(&self, format: &str, reader: &mut dyn Read) -> Result<Node> {
        self.codec(format)?.decode(reader)
    }

    /// Encode `value` as `format` into a string.
    pub fn encode_to_string(&self, format: &str, value: &Node) -> Result<String> {
        let mut buffer = Vec::new();
        self.encode(format, value, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| Error::Codec {
            format: format.to_string(),
            message: err.to_string(),
        })
    }
}

fn read_to_string(reader: &mut dyn Read) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}
