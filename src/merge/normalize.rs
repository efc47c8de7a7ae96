//! Array normalizer: digit-keyed maps become sequences.
//!
//! While overrides are inserted, array elements live in maps keyed by their
//! decimal index. This pass runs once at the end and turns every such map
//! into a real sequence, children first.
//!
//! Index keys must be canonical (`"0"`, `"1"`, ..., never `"01"`) and cover
//! `0..len` with no gaps. Anything else is reported as
//! [`Error::Normalize`] instead of guessing at a layout.

use super::join_key_path;
use crate::error::{Error, Result};
use crate::tree::{Map, Node};

/// Normalize a whole tree, converting array-eligible maps to sequences
///
/// Sequences and scalars are returned as they are. Running it on an already
/// normalized tree changes nothing.
pub fn normalize(node: Node) -> Result<Node> {
    normalize_at(node, &mut Vec::new())
}

/// Whether every key of a non-empty map is a non-empty run of ASCII digits.
pub fn is_array_eligible(map: &Map) -> bool {
    !map.is_empty() && map.keys().all(|key| is_digits(key))
}

fn is_digits(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn normalize_at(node: Node, path: &mut Vec<String>) -> Result<Node> {
    let Node::Map(map) = node else {
        return Ok(node);
    };

    let mut normalized = Map::new();
    for (key, value) in map {
        path.push(key);
        let value = normalize_at(value, path)?;
        let key = path.pop().unwrap_or_default();
        normalized.insert(key, value);
    }

    if is_array_eligible(&normalized) {
        map_to_seq(normalized, path).map(Node::Seq)
    } else {
        Ok(Node::Map(normalized))
    }
}

fn map_to_seq(map: Map, path: &[String]) -> Result<Vec<Node>> {
    let len = map.len();
    let invalid = |message: String| Error::Normalize {
        path: join_key_path(path),
        message,
    };

    let mut slots: Vec<Option<Node>> = (0..len).map(|_| None).collect();
    for (key, value) in map {
        if key.len() > 1 && key.starts_with('0') {
            return Err(invalid(format!("index {:?} has leading zeros", key)));
        }
        let index = key
            .parse::<usize>()
            .map_err(|err| invalid(format!("index {:?} is not a valid index: {}", key, err)))?;
        let slot = slots.get_mut(index).ok_or_else(|| {
            invalid(format!(
                "index {} out of range for {} elements",
                index, len
            ))
        })?;
        *slot = Some(value);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or_else(|| invalid(format!("index {} is missing", index))))
        .collect()
}
