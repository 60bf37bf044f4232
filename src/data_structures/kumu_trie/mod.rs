// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kumu Trie Implementation
//!
//! A compressed prefix tree (radix trie) mapping byte-string keys to values.
//! Edges carry whole key segments rather than single bytes: a new key gets a
//! leaf holding its entire unmatched suffix, and an existing edge is split
//! only when a later key diverges partway through it.
//!
//! Besides exact lookup the trie answers *prefix-chain* queries: every stored
//! value whose key is a prefix of the query, shallowest first.
//!
//! # Example
//!
//! ```
//! use kumu_trie::data_structures::kumu_trie::KumuTrie;
//!
//! let mut trie = KumuTrie::new();
//! trie.insert("abcde", 7);
//! trie.insert("abcde-", 8);
//! trie.insert("a", 9);
//!
//! assert_eq!(trie.find("abcde"), Some(&7));
//! assert_eq!(trie.find("abcde-123"), None);
//! assert_eq!(trie.find_series("abcde-123"), vec![&9, &7, &8]);
//! ```
//!
//! # Concurrency
//!
//! `KumuTrie` has no internal locking; mutation goes through `&mut self`.
//! [`SharedKumuTrie`] wraps a whole trie in a single reader/writer lock for
//! callers that need to share one between threads.

mod config;
mod error;
mod node;
mod shared;
mod traverse;

use std::collections::hash_map::Entry;
use std::fmt;
use std::io;

pub use self::config::KumuTrieConfig;
pub use error::{KumuTrieError, KumuTrieResult};
pub use node::shared_prefix_len;
pub use shared::SharedKumuTrie;
pub use traverse::Traversal;

pub(crate) use node::{EdgeMap, TrieNode};

/// A compressed prefix tree supporting exact and prefix-chain lookups.
///
/// Keys are treated as sequences of bytes; anything implementing
/// `AsRef<[u8]>` (`&str`, `String`, `&[u8]`, `Vec<u8>`) can be used.
/// The empty key is never stored.
#[derive(Debug, Clone)]
pub struct KumuTrie<T> {
    /// Entry points, keyed by the first byte of each top-level label
    pub(crate) roots: EdgeMap<T>,

    /// Number of distinct keys stored
    len: usize,

    /// Configuration options
    config: KumuTrieConfig,
}

impl<T> KumuTrie<T> {
    /// Creates a new empty `KumuTrie` with default configuration.
    pub fn new() -> Self {
        Self {
            roots: EdgeMap::default(),
            len: 0,
            config: KumuTrieConfig::default(),
        }
    }

    /// Creates a new empty `KumuTrie` with the specified configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(KumuTrie)` - An empty trie using `config`.
    /// * `Err(KumuTrieError::InvalidConfiguration)` - If `config` fails validation.
    pub fn with_config(config: KumuTrieConfig) -> KumuTrieResult<Self> {
        config.validate()?;
        Ok(Self {
            roots: EdgeMap::default(),
            len: 0,
            config,
        })
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &KumuTrieConfig {
        &self.config
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Re-inserting an existing key overwrites its value and keeps every key
    /// stored below it.
    ///
    /// # Returns
    ///
    /// `false` if `key` is empty (nothing is stored), `true` otherwise.
    pub fn insert<K>(&mut self, key: K, value: T) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.try_insert(key, value).is_ok()
    }

    /// Inserts a key-value pair, reporting what was replaced.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(old))` - The key was already present; `old` was its value.
    /// * `Ok(None)` - The key is new.
    /// * `Err(KumuTrieError::EmptyKey)` - `key` is empty.
    pub fn try_insert<K>(&mut self, key: K, value: T) -> KumuTrieResult<Option<T>>
    where
        K: AsRef<[u8]>,
    {
        let mut key = key.as_ref();
        if key.is_empty() {
            tracing::debug!("rejecting empty key");
            return Err(KumuTrieError::EmptyKey);
        }

        let mut edges = &mut self.roots;
        let previous = loop {
            let node = match edges.entry(key[0]) {
                Entry::Vacant(slot) => {
                    tracing::trace!(label = %String::from_utf8_lossy(key), "adding leaf");
                    slot.insert(TrieNode::leaf(key, value));
                    break None;
                }
                Entry::Occupied(slot) => slot.into_mut(),
            };

            // Non-zero: the edge was found by the key's first byte.
            let prefix_size = shared_prefix_len(&node.label, key);
            if prefix_size < node.label.len() {
                node.split_at(prefix_size);
            }

            key = &key[prefix_size..];
            if key.is_empty() {
                break node.value.replace(value);
            }
            edges = &mut node.children;
        };

        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Retrieves the value stored for exactly `key`.
    ///
    /// Returns `None` for the empty key, for keys with no matching path and
    /// for keys that only name an internal branch point.
    pub fn find<K>(&self, key: K) -> Option<&T>
    where
        K: AsRef<[u8]>,
    {
        let mut key = key.as_ref();
        let mut edges = &self.roots;
        loop {
            let node = edges.get(key.first()?)?;
            let rest = key.strip_prefix(node.label.as_slice())?;
            if rest.is_empty() {
                return node.value.as_ref();
            }
            edges = &node.children;
            key = rest;
        }
    }

    /// Checks if `key` was inserted.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.find(key).is_some()
    }

    /// Collects the values of every stored key that is a prefix of `key`,
    /// shallowest first. `key` itself is included when it is stored.
    pub fn find_series<K>(&self, key: K) -> Vec<&T>
    where
        K: AsRef<[u8]>,
    {
        self.series(key.as_ref()).collect()
    }

    /// Lazily walks the prefix chain of `key`; see [`KumuTrie::find_series`].
    pub fn series<'t, 'k, K>(&'t self, key: &'k K) -> Series<'t, 'k, T>
    where
        K: AsRef<[u8]> + ?Sized,
    {
        Series {
            edges: &self.roots,
            rest: key.as_ref(),
        }
    }

    /// Value of the longest stored key that is a prefix of `key`.
    pub fn longest_prefix<K>(&self, key: K) -> Option<&T>
    where
        K: AsRef<[u8]>,
    {
        self.series(key.as_ref()).last()
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes reachable from the roots.
    pub fn node_count(&self) -> usize {
        self.roots.values().map(TrieNode::subtree_size).sum()
    }

    /// Removes every key, keeping the configuration.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.len = 0;
    }

    /// Returns a [`fmt::Display`] adapter rendering the debug traversal.
    pub fn traversal(&self) -> Traversal<'_, T> {
        Traversal::new(self)
    }

    /// Writes the debug traversal into a formatter sink.
    pub fn write_traversal<W>(&self, out: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(out, "{}", self.traversal())
    }

    /// Writes the debug traversal into an I/O sink.
    pub fn print_traverse<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        write!(out, "{}", self.traversal())
    }
}

impl<T> Default for KumuTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Extend<(K, T)> for KumuTrie<T>
where
    K: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, T> FromIterator<(K, T)> for KumuTrie<T>
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

/// Iterator over the prefix chain of a query, created by [`KumuTrie::series`].
#[derive(Debug, Clone)]
pub struct Series<'t, 'k, T> {
    edges: &'t EdgeMap<T>,
    rest: &'k [u8],
}

impl<'t, 'k, T> Iterator for Series<'t, 'k, T> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let edges = self.edges;
            let node = edges.get(self.rest.first()?)?;
            match self.rest.strip_prefix(node.label.as_slice()) {
                Some(rest) => {
                    self.rest = rest;
                    self.edges = &node.children;
                }
                None => {
                    // Diverged inside the label.
                    self.rest = &[];
                    return None;
                }
            }
            if let Some(value) = &node.value {
                return Some(value);
            }
        }
    }
}
