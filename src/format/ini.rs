//! INI codec
//!
//! INI only has one level of nesting, so deeper paths are folded into
//! section names using the same dotted key syntax as overrides:
//!
//! ```text
//! {"name": "x", "db": {"host": "h", "replicas": [{"port": 1}]}}
//!
//! name=x
//!
//! [db]
//! host=h
//!
//! [db.replicas.0]
//! port=1
//! ```
//!
//! Decoding reverses the folding; every value comes back as a string.
//! Empty maps and sequences have no INI representation and are dropped.
//!
//! Values are read and written verbatim: backslashes and quotes carry no
//! meaning, so Windows paths and regular expressions survive unchanged.

use std::io::{Read, Write};

use ini::{EscapePolicy, Ini, ParseOption, WriteOption};

use super::Codec;
use crate::error::{Error, Result};
use crate::merge::{insert, join_key_path, normalize, parse_key_path};
use crate::tree::Node;

pub struct IniCodec;

impl Codec for IniCodec {
    fn encode(&self, value: &Node, writer: &mut dyn Write) -> Result<()> {
        if value.is_scalar() {
            return Err(Error::Codec {
                format: "ini".to_string(),
                message: format!("document root must be a map, found {}", value.type_name()),
            });
        }

        let mut entries = Vec::new();
        flatten(value, &mut Vec::new(), &mut entries);

        let mut ini = Ini::new();
        for entry in entries {
            match entry.section {
                Some(section) => {
                    ini.with_section(Some(section)).set(entry.key, entry.value);
                }
                None => {
                    ini.with_general_section().set(entry.key, entry.value);
                }
            }
        }

        let mut buffer = Vec::new();
        ini.write_to_opt(
            &mut buffer,
            WriteOption {
                escape_policy: EscapePolicy::Nothing,
                ..WriteOption::default()
            },
        )?;
        writer.write_all(&buffer)?;
        Ok(())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Node> {
        let content = super::read_to_string(reader)?;
        let ini = Ini::load_from_str_opt(
            &content,
            ParseOption {
                enabled_escape: false,
                enabled_quote: false,
                ..ParseOption::default()
            },
        )?;
        let mut root = Node::empty_map();

        for (section, properties) in ini.iter() {
            let section_path = section.map(parse_key_path).unwrap_or_default();
            for (key, value) in properties.iter() {
                let mut path = section_path.clone();
                path.push(key.to_string());
                insert(&mut root, &path, Node::from(value));
            }
        }

        normalize(root)
    }
}

struct IniEntry {
    section: Option<String>,
    key: String,
    value: String,
}

fn flatten(value: &Node, path: &mut Vec<String>, out: &mut Vec<IniEntry>) {
    let children: Vec<(String, &Node)> = match value {
        Node::Map(map) => map.iter().map(|(key, child)| (key.clone(), child)).collect(),
        Node::Seq(seq) => seq
            .iter()
            .enumerate()
            .map(|(ix, child)| (ix.to_string(), child))
            .collect(),
        _ => return,
    };

    for (key, child) in children {
        if let Some(text) = scalar_text(child) {
            out.push(IniEntry {
                section: (!path.is_empty()).then(|| join_key_path(path)),
                key,
                value: text,
            });
        } else {
            path.push(key);
            flatten(child, path, out);
            path.pop();
        }
    }
}

fn scalar_text(value: &Node) -> Option<String> {
    match value {
        Node::Null => Some(String::new()),
        Node::Bool(b) => Some(b.to_string()),
        Node::Integer(i) => Some(i.to_string()),
        Node::Float(f) => Some(f.to_string()),
        Node::String(s) => Some(s.clone()),
        Node::Map(_) | Node::Seq(_) => None,
    }
}
