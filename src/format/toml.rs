//! TOML codec
//!
//! TOML has no null, so null values are left out when encoding, and the
//! document root has to be a table.

use std::io::{Read, Write};

use toml::Value as TomlValue;

use super::Codec;
use crate::error::{Error, Result};
use crate::tree::{Map, Node};

pub struct TomlCodec;

impl Codec for TomlCodec {
    fn encode(&self, value: &Node, writer: &mut dyn Write) -> Result<()> {
        let Some(TomlValue::Table(table)) = to_toml(value) else {
            return Err(Error::Codec {
                format: "toml".to_string(),
                message: format!("document root must be a map, found {}", value.type_name()),
            });
        };
        let text = toml::to_string_pretty(&table)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Node> {
        let content = super::read_to_string(reader)?;
        let table: toml::Table = toml::from_str(&content)?;
        Ok(Node::from(TomlValue::Table(table)))
    }
}

/// Convert a node to TOML, or `None` for null.
fn to_toml(value: &Node) -> Option<TomlValue> {
    Some(match value {
        Node::Null => return None,
        Node::Bool(b) => TomlValue::Boolean(*b),
        Node::Integer(i) => TomlValue::Integer(*i),
        Node::Float(f) => TomlValue::Float(*f),
        Node::String(s) => TomlValue::String(s.clone()),
        Node::Map(map) => TomlValue::Table(
            map.iter()
                .filter_map(|(key, value)| to_toml(value).map(|value| (key.clone(), value)))
                .collect(),
        ),
        Node::Seq(seq) => TomlValue::Array(seq.iter().filter_map(to_toml).collect()),
    })
}

impl From<TomlValue> for Node {
    fn from(value: TomlValue) -> Self {
        match value {
            TomlValue::String(s) => Node::String(s),
            TomlValue::Integer(i) => Node::Integer(i),
            TomlValue::Float(f) => Node::Float(f),
            TomlValue::Boolean(b) => Node::Bool(b),
            TomlValue::Datetime(dt) => Node::String(dt.to_string()),
            TomlValue::Array(array) => Node::Seq(array.into_iter().map(Node::from).collect()),
            TomlValue::Table(table) => Node::Map(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    fn encode(value: &Node) -> Result<String> {
        let mut out = Vec::new();
        TomlCodec.encode(value, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_toml_encode_nested_tables() {
        let text = encode(&node(json!({
            "title": "demo",
            "database": {"port": 5432, "host": "db"}
        })))
        .unwrap();
        let reparsed: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(reparsed["title"].as_str(), Some("demo"));
        assert_eq!(reparsed["database"]["port"].as_integer(), Some(5432));
        assert_eq!(reparsed["database"]["host"].as_str(), Some("db"));
    }

    #[test]
    fn test_toml_encode_skips_nulls() {
        let text = encode(&node(json!({"a": null, "b": "c", "list": [null, "x"]}))).unwrap();
        let reparsed: toml::Table = toml::from_str(&text).unwrap();
        assert!(!reparsed.contains_key("a"));
        assert_eq!(reparsed["list"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_toml_encode_empty_string() {
        let text = encode(&node(json!({"blank": ""}))).unwrap();
        assert_eq!(text.trim(), r#"blank = """#);
    }

    #[test]
    fn test_toml_encode_rejects_sequence_root() {
        let err = encode(&node(json!(["a"]))).unwrap_err();
        assert!(err.to_string().contains("document root must be a map"));
    }

    #[test]
    fn test_toml_decode() {
        let decoded = TomlCodec
            .decode(&mut "a = 1\n[b]\nc = [\"d\"]\nwhen = 1979-05-27T07:32:00Z\n".as_bytes())
            .unwrap();
        assert_eq!(
            decoded,
            node(json!({"a": 1, "b": {"c": ["d"], "when": "1979-05-27T07:32:00Z"}}))
        );
    }
}
