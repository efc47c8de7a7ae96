//! Deleting key paths from a tree, and ordering the deletes safely.
//!
//! Removing a sequence element shifts every later element down by one. If
//! `list.0` were deleted before `list.1`, the second delete would hit what
//! used to be `list.2`. [`sort_delete_keys`] orders deletes so that each one
//! still addresses the element it named in the original tree.

use std::cmp::Reverse;

use super::parse_key_path;
use crate::tree::Node;

/// Outcome of [`delete_key_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deletion {
    /// The path resolved and its value was removed.
    Removed,
    /// Some segment did not resolve; the tree is unchanged.
    NotFound,
    /// The path was empty: the caller must drop the node it passed in.
    DropSelf,
}

/// Remove the value at `path` from `node`
///
/// Map keys are removed; sequence indices are removed and the following
/// elements shift down. A missing key, an out of range or non-numeric
/// sequence index, or a scalar in the way makes the delete a no-op.
pub fn delete_key_path(node: &mut Node, path: &[String]) -> Deletion {
    let Some((key, rest)) = path.split_first() else {
        return Deletion::DropSelf;
    };

    match node {
        Node::Map(map) => {
            let Some(child) = map.get_mut(key) else {
                return Deletion::NotFound;
            };
            match delete_key_path(child, rest) {
                Deletion::DropSelf => {
                    map.remove(key);
                    Deletion::Removed
                }
                outcome => outcome,
            }
        }
        Node::Seq(seq) => {
            let Some(index) = parse_index(key).filter(|ix| *ix < seq.len()) else {
                return Deletion::NotFound;
            };
            match delete_key_path(&mut seq[index], rest) {
                Deletion::DropSelf => {
                    seq.remove(index);
                    Deletion::Removed
                }
                outcome => outcome,
            }
        }
        _ => Deletion::NotFound,
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Numeric value of a segment for ordering: digits parse (saturating on
/// overflow), anything else counts as 0.
fn segment_rank(segment: &str) -> u64 {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    segment.parse().unwrap_or(u64::MAX)
}

/// Order delete keys so that applying them one after another is safe
///
/// 1. Paths with more segments come first, so `foo.1.bar` is removed before
///    `foo.1` can shift it away.
/// 2. Among paths of equal length, the first segment whose numeric value
///    differs decides: the higher index comes first.
/// 3. Otherwise the original order is kept.
///
/// # Examples
///
/// ```
/// use env2conf::merge::sort_delete_keys;
///
/// let mut keys = vec!["foo.2".to_string(), "foo.10".to_string(), "foo.1.bar".to_string()];
/// sort_delete_keys(&mut keys);
/// assert_eq!(keys, vec!["foo.1.bar", "foo.10", "foo.2"]);
/// ```
pub fn sort_delete_keys(keys: &mut [String]) {
    keys.sort_by_cached_key(|key| {
        let ranks: Vec<u64> = parse_key_path(key)
            .iter()
            .map(|segment| segment_rank(segment))
            .collect();
        (Reverse(ranks.len()), Reverse(ranks))
    });
}
