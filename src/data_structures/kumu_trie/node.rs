// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Kumu Trie.
//!
//! Each node owns the compressed label of the edge leading into it, an
//! optional value (present exactly when a key ends here) and the edge map to
//! its children.

use fnv::FnvHashMap;

/// Map from a branching byte (the first byte of a child's label) to the child.
pub(crate) type EdgeMap<T> = FnvHashMap<u8, TrieNode<T>>;

/// A node in the Kumu Trie.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<T> {
    /// Compressed segment of the key represented by the incoming edge. Never empty.
    pub(crate) label: Vec<u8>,

    /// Value stored for the key ending at this node; `None` for branch nodes.
    pub(crate) value: Option<T>,

    /// Children keyed by the first byte of their label.
    pub(crate) children: EdgeMap<T>,
}

impl<T> TrieNode<T> {
    /// Creates a terminal leaf holding the whole remaining key as its label.
    pub(crate) fn leaf(label: &[u8], value: T) -> Self {
        debug_assert!(!label.is_empty());
        Self {
            label: label.to_vec(),
            value: Some(value),
            children: EdgeMap::default(),
        }
    }

    /// Whether a key ends exactly at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Byte under which this node is filed in its parent's edge map.
    pub(crate) fn branch(&self) -> u8 {
        self.label[0]
    }

    /// Splits the label so that this node keeps `label[..at]`.
    ///
    /// The tail moves into a new single child together with this node's value
    /// and children, leaving this node as a pure branch point.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let lower = TrieNode {
            label: self.label.split_off(at),
            value: self.value.take(),
            children: std::mem::take(&mut self.children),
        };
        tracing::trace!(
            upper = %String::from_utf8_lossy(&self.label),
            lower = %String::from_utf8_lossy(&lower.label),
            "splitting node"
        );
        self.children.insert(lower.branch(), lower);
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }
}

/// Length of the longest common prefix of `a` and `b`, compared byte by byte.
///
/// Returns 0 when either input is empty.
pub fn shared_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefix_len() {
        assert_eq!(shared_prefix_len(b"", b"abc"), 0);
        assert_eq!(shared_prefix_len(b"abc", b""), 0);
        assert_eq!(shared_prefix_len(b"cba", b"abc"), 0);

        assert_eq!(shared_prefix_len(b"a", b"abcdefgh"), 1);
        assert_eq!(shared_prefix_len(b"abcdefgh", b"a"), 1);

        assert_eq!(shared_prefix_len(b"abcdef", b"abc"), 3);
        assert_eq!(shared_prefix_len(b"abc", b"abcdef"), 3);
        assert_eq!(shared_prefix_len(b"abc", b"abc"), 3);
    }

    #[test]
    fn test_split_moves_value_and_children() {
        let mut node = TrieNode::leaf(b"abcde", 7);
        node.children.insert(b'-', TrieNode::leaf(b"-", 8));

        node.split_at(3);

        assert_eq!(node.label, b"abc");
        assert!(!node.is_terminal());
        assert_eq!(node.children.len(), 1);

        let lower = &node.children[&b'd'];
        assert_eq!(lower.label, b"de");
        assert_eq!(lower.value, Some(7));
        assert_eq!(lower.children[&b'-'].value, Some(8));
        assert_eq!(node.subtree_size(), 3);
    }
}
