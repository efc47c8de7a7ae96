//! Tree builder: set a value at a key path, creating maps along the way.

use log::warn;

use super::join_key_path;
use crate::tree::{seq_to_map, Map, Node};

/// Set `value` at `path` inside `root`
///
/// Every node on the way must become a map:
/// - a missing segment gets a fresh empty map,
/// - a sequence is turned back into a map keyed by its indices, so numeric
///   segments land on the existing elements,
/// - any scalar is discarded and replaced with an empty map.
///
/// The last segment overwrites whatever was stored there. An empty path
/// replaces `root` itself.
pub fn insert(root: &mut Node, path: &[String], value: Node) {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return;
    };

    let mut current = ensure_map(root, &path[..0]);
    for (depth, segment) in parents.iter().enumerate() {
        let child = current
            .entry(segment.clone())
            .or_insert_with(Node::empty_map);
        current = ensure_map(child, &path[..=depth]);
    }
    current.insert(last.clone(), value);
}

/// Turn `node` into a map in place and borrow that map.
fn ensure_map<'a>(node: &'a mut Node, path: &[String]) -> &'a mut Map {
    let map = match std::mem::take(node) {
        Node::Map(map) => map,
        Node::Seq(seq) => seq_to_map(seq),
        Node::Null => Map::new(),
        other => {
            warn!(
                "Type mismatch at path '{}': replacing {} with map",
                join_key_path(path),
                other.type_name()
            );
            Map::new()
        }
    };
    *node = Node::Map(map);

    match node {
        Node::Map(map) => map,
        _ => unreachable!("node was just replaced with a map"),
    }
}
