// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Debug rendering of a Kumu Trie.

use std::borrow::Cow;
use std::fmt;

use super::{EdgeMap, KumuTrie, TrieNode};

/// Indented, depth-annotated rendering of every node in a trie.
///
/// Created by [`KumuTrie::traversal`]. Values are not printed, only labels,
/// terminal markers and branching bytes.
pub struct Traversal<'a, T> {
    trie: &'a KumuTrie<T>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(trie: &'a KumuTrie<T>) -> Self {
        Self { trie }
    }

    fn edges<'e>(&self, edges: &'e EdgeMap<T>) -> Vec<(u8, &'e TrieNode<T>)> {
        let mut entries: Vec<_> = edges.iter().map(|(branch, node)| (*branch, node)).collect();
        if self.trie.config().sorted_traversal {
            entries.sort_unstable_by_key(|(branch, _)| *branch);
        }
        entries
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: &TrieNode<T>, level: usize) -> fmt::Result {
        let indent = " ".repeat(level * self.trie.config().indent_width);
        writeln!(
            f,
            "{indent}:{level} NODE({}) {}",
            String::from_utf8_lossy(&node.label),
            if node.is_terminal() { "-terminal-" } else { "" }
        )?;
        for (branch, child) in self.edges(&node.children) {
            writeln!(f, "{indent}:{level} => {}", unit(branch))?;
            self.write_node(f, child, level + 1)?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for Traversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n============= traverse trie =============\n")?;
        for (branch, node) in self.edges(&self.trie.roots) {
            writeln!(f, "#{}", unit(branch))?;
            self.write_node(f, node, 0)?;
        }
        f.write_str("\n============= traverse finish =============\n")
    }
}

/// Branching byte as printable text; bytes outside ASCII render as U+FFFD.
fn unit(byte: u8) -> Cow<'static, str> {
    match byte {
        0..=0x7f => Cow::Owned(char::from(byte).to_string()),
        _ => Cow::Borrowed("\u{fffd}"),
    }
}
