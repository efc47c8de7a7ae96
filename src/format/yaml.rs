//! YAML codec
//!
//! Override values arrive as strings, so before encoding the tree is walked
//! and plain `true`/`false` and decimal integers are written as YAML booleans
//! and integers rather than quoted strings.
//!
//! Null values are written as `null`. A template entry such as `key:` (an
//! empty scalar) therefore comes back as `key: null`, which YAML readers load
//! as the same null.

use std::io::{Read, Write};

use super::Codec;
use crate::error::Result;
use crate::tree::Node;

pub struct YamlCodec;

impl Codec for YamlCodec {
    fn encode(&self, value: &Node, writer: &mut dyn Write) -> Result<()> {
        serde_yaml::to_writer(writer, &infer_scalars(value.clone()))?;
        Ok(())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Node> {
        let content = super::read_to_string(reader)?;
        if content.trim().is_empty() {
            return Ok(Node::Null);
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Re-type string scalars that look like booleans or integers.
pub fn infer_scalars(value: Node) -> Node {
    match value {
        Node::String(s) => infer_scalar(s),
        Node::Map(map) => Node::Map(
            map.into_iter()
                .map(|(key, value)| (key, infer_scalars(value)))
                .collect(),
        ),
        Node::Seq(seq) => Node::Seq(seq.into_iter().map(infer_scalars).collect()),
        other => other,
    }
}

fn infer_scalar(s: String) -> Node {
    match s.as_str() {
        "true" => return Node::Bool(true),
        "false" => return Node::Bool(false),
        _ => {}
    }

    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if canonical {
        if let Ok(integer) = s.parse::<i64>() {
            return Node::Integer(integer);
        }
    }
    Node::String(s)
}
