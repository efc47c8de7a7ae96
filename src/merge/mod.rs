//! Key-path merge engine
//!
//! This module turns flat, dotted override keys into a nested [`Node`] tree and
//! merges them onto an optional template document.
//!
//! ## Key paths
//!
//! A key like `servers.0.host` addresses the `host` field of the first
//! element of `servers`. A dot preceded by a backslash is part of the
//! segment: `x\.y.z` addresses field `z` of field `x.y`.
//!
//! ## Merge steps
//!
//! 1. Start from the template, or an empty map.
//! 2. Apply deletes, deepest and highest-index first ([`sort_delete_keys`]).
//! 3. Insert every override ([`insert`]).
//! 4. Turn digit-keyed maps into sequences ([`normalize`]).
//!
//! ```
//! use std::collections::BTreeMap;
//! use env2conf::merge::merge;
//! use env2conf::tree::Node;
//!
//! let mut overrides = BTreeMap::new();
//! overrides.insert("A.1.B".to_string(), "D".to_string());
//! overrides.insert("A.0.B".to_string(), "C".to_string());
//!
//! let tree = merge(None, &[], &overrides).unwrap();
//! let first = tree.get("A").and_then(|a| a.get("0")).and_then(|e| e.get("B"));
//! assert_eq!(first, Some(&Node::from("C")));
//! ```

mod delete;
mod insert;
mod normalize;

use std::collections::BTreeMap;

use log::debug;

use crate::error::Result;
use crate::tree::Node;

pub use delete::{delete_key_path, sort_delete_keys, Deletion};
pub use insert::insert;
pub use normalize::{is_array_eligible, normalize};

/// Separator between key path segments.
pub const KEY_SEPARATOR: char = '.';

const ESCAPED_SEPARATOR: &str = "\\.";

/// Parse a dotted key into its path segments
///
/// A `.` separates segments unless the character right before it is a
/// backslash; `\.` is unescaped to a literal dot. The text after the last
/// separator is always a segment, so `""` parses to `[""]` and `"a."` to
/// `["a", ""]`.
///
/// # Examples
///
/// ```
/// use env2conf::merge::parse_key_path;
///
/// assert_eq!(parse_key_path(r"x\.y.z"), vec!["x.y", "z"]);
/// ```
pub fn parse_key_path(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut previous = None;

    for (ix, ch) in key.char_indices() {
        if ch == KEY_SEPARATOR && previous != Some('\\') {
            segments.push(unescape_segment(&key[cursor..ix]));
            cursor = ix + ch.len_utf8();
        }
        previous = Some(ch);
    }
    segments.push(unescape_segment(&key[cursor..]));

    segments
}

/// Replace every literal `.` with `\.`.
pub fn escape_segment(segment: &str) -> String {
    segment.replace(KEY_SEPARATOR, ESCAPED_SEPARATOR)
}

/// Replace every `\.` with a literal `.`.
pub fn unescape_segment(segment: &str) -> String {
    segment.replace(ESCAPED_SEPARATOR, ".")
}

/// Join segments into a dotted key, escaping dots inside segments.
pub fn join_key_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| escape_segment(segment.as_ref()))
        .collect::<Vec<_>>()
        .join(".")
}

/// Merge overrides and deletes onto an optional template
///
/// Deletes of paths that do not exist are ignored. Overrides replace
/// whatever they collide with. The only failure is an array normalization
/// error, which aborts the merge.
///
/// # Arguments
///
/// * `template` - Pre-parsed document to start from; `None` starts empty
/// * `deletes` - Dotted keys to remove from the template
/// * `overrides` - Dotted keys and the string values to set
pub fn merge(
    template: Option<Node>,
    deletes: &[String],
    overrides: &BTreeMap<String, String>,
) -> Result<Node> {
    let mut root = template.unwrap_or_else(Node::empty_map);

    let mut deletes = deletes.to_vec();
    sort_delete_keys(&mut deletes);
    for key in &deletes {
        match delete_key_path(&mut root, &parse_key_path(key)) {
            Deletion::Removed => debug!("Deleted key '{}'", key),
            Deletion::NotFound => debug!("Key '{}' not present, nothing to delete", key),
            Deletion::DropSelf => root = Node::empty_map(),
        }
    }

    for (key, value) in overrides {
        insert(&mut root, &parse_key_path(key), Node::String(value.clone()));
    }

    normalize(root)
}
