//! Property-based tests for key paths and tree normalization.
//!
//! These tests use proptest to generate random keys and trees and check that
//! the merge engine's invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeMap;

    use crate::merge::{
        insert, join_key_path, merge, normalize, parse_key_path, sort_delete_keys,
        unescape_segment,
    };
    use crate::tree::Node;
    use proptest::prelude::*;

    // ============================================================================
    // parse_key_path property tests
    // ============================================================================

    proptest! {
        /// Property: a key with no separators parses to a single segment
        #[test]
        fn parse_key_path_without_dots_is_one_segment(key in "[^.]*") {
            prop_assert_eq!(parse_key_path(&key), vec![unescape_segment(&key)]);
        }

        /// Property: joining and parsing gives back the segments
        #[test]
        fn join_then_parse_round_trips(segments in prop::collection::vec("[a-z0-9._-]{0,8}", 1..6)) {
            let key = join_key_path(&segments);
            prop_assert_eq!(parse_key_path(&key), segments);
        }

        /// Property: unescaped keys split into one more segment than they have dots
        #[test]
        fn parse_key_path_segment_count(key in "[a-z0-9.]{0,24}") {
            let dots = key.matches('.').count();
            prop_assert_eq!(parse_key_path(&key).len(), dots + 1);
        }
    }

    // ============================================================================
    // normalize property tests
    // ============================================================================

    fn tree_from_keys(keys: &[(Vec<String>, String)]) -> Node {
        let mut root = Node::empty_map();
        for (path, value) in keys {
            insert(&mut root, path, Node::String(value.clone()));
        }
        root
    }

    proptest! {
        /// Property: normalizing a normalized tree changes nothing
        #[test]
        fn normalize_is_idempotent(
            keys in prop::collection::vec(
                (prop::collection::vec("[0-2ab]", 1..4), "[a-z]{0,4}"),
                0..12,
            )
        ) {
            if let Ok(once) = normalize(tree_from_keys(&keys)) {
                let twice = normalize(once.clone()).unwrap();
                prop_assert_eq!(twice, once);
            }
        }

        /// Property: sequential indices always become a sequence of that length
        #[test]
        fn sequential_indices_become_sequence(values in prop::collection::vec("[a-z]{1,4}", 1..20)) {
            let overrides: BTreeMap<String, String> = values
                .iter()
                .enumerate()
                .map(|(ix, value)| (format!("list.{ix}"), value.clone()))
                .collect();

            let tree = merge(None, &[], &overrides).unwrap();
            let list = tree.get("list").and_then(Node::as_seq).unwrap();
            prop_assert_eq!(list.len(), values.len());
            for (ix, value) in values.iter().enumerate() {
                prop_assert_eq!(list[ix].as_str(), Some(value.as_str()));
            }
        }
    }

    // ============================================================================
    // sort_delete_keys property tests
    // ============================================================================

    proptest! {
        /// Property: sorting keeps exactly the same keys
        #[test]
        fn sort_delete_keys_is_permutation(keys in prop::collection::vec("[a-c0-9]{1,3}(\\.[a-c0-9]{1,3}){0,3}", 0..10)) {
            let mut sorted = keys.clone();
            sort_delete_keys(&mut sorted);

            let mut expected = keys;
            expected.sort();
            let mut actual = sorted.clone();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }

        /// Property: longer paths are never deleted after shorter ones
        #[test]
        fn sort_delete_keys_longest_first(keys in prop::collection::vec("[a-c0-9]{1,3}(\\.[a-c0-9]{1,3}){0,3}", 0..10)) {
            let mut sorted = keys;
            sort_delete_keys(&mut sorted);
            let lengths: Vec<usize> = sorted.iter().map(|key| parse_key_path(key).len()).collect();
            prop_assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }
}
