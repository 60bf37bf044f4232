//! Data structures for the Kumu Trie crate.
//!
//! The crate currently ships a single structure, the compressed prefix tree
//! in [`kumu_trie`], together with a locked wrapper for shared use.

pub mod kumu_trie;

// Re-export common data structures
pub use kumu_trie::{KumuTrie, KumuTrieConfig, KumuTrieError, KumuTrieResult, SharedKumuTrie};
