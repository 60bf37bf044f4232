// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe wrapper around a whole Kumu Trie.

use std::io;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{KumuTrie, KumuTrieConfig, KumuTrieResult};

/// A `KumuTrie` behind one coarse-grained reader/writer lock.
///
/// Lookups take the read lock and return cloned values; insertions take the
/// write lock for the duration of a single insert. Use [`SharedKumuTrie::read`]
/// to run several borrowed lookups under one guard.
#[derive(Debug)]
pub struct SharedKumuTrie<T> {
    inner: RwLock<KumuTrie<T>>,
}

impl<T> SharedKumuTrie<T> {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from_trie(KumuTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: KumuTrieConfig) -> KumuTrieResult<Self> {
        KumuTrie::with_config(config).map(Self::from_trie)
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: KumuTrie<T>) -> Self {
        Self {
            inner: RwLock::new(trie),
        }
    }

    /// Inserts a key-value pair. Returns `false` only for an empty key.
    pub fn insert<K>(&self, key: K, value: T) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.inner.write().insert(key, value)
    }

    /// Inserts a key-value pair, returning the replaced value if any.
    pub fn try_insert<K>(&self, key: K, value: T) -> KumuTrieResult<Option<T>>
    where
        K: AsRef<[u8]>,
    {
        self.inner.write().try_insert(key, value)
    }

    /// Checks if `key` was inserted.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.inner.read().contains_key(key)
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every key.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Acquires the read lock for borrowed access to the trie.
    pub fn read(&self) -> RwLockReadGuard<'_, KumuTrie<T>> {
        self.inner.read()
    }

    /// Writes the debug traversal into an I/O sink.
    pub fn print_traverse<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.inner.read().print_traverse(out)
    }

    /// Consumes the wrapper, returning the trie.
    pub fn into_inner(self) -> KumuTrie<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SharedKumuTrie<T> {
    /// Retrieves a copy of the value stored for exactly `key`.
    pub fn find<K>(&self, key: K) -> Option<T>
    where
        K: AsRef<[u8]>,
    {
        self.inner.read().find(key).cloned()
    }

    /// Copies of the values of every stored prefix of `key`, shallowest first.
    pub fn find_series<K>(&self, key: K) -> Vec<T>
    where
        K: AsRef<[u8]>,
    {
        self.inner
            .read()
            .find_series(key)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl<T> Default for SharedKumuTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<KumuTrie<T>> for SharedKumuTrie<T> {
    fn from(trie: KumuTrie<T>) -> Self {
        Self::from_trie(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_shared_basic_operations() {
        let trie = SharedKumuTrie::new();
        assert!(trie.is_empty());

        assert!(trie.insert("route", 1));
        assert!(trie.insert("route/users", 2));
        assert!(!trie.insert("", 3));

        assert_eq!(trie.find("route"), Some(1));
        assert_eq!(trie.find_series("route/users/42"), vec![1, 2]);
        assert_eq!(trie.try_insert("route", 10), Ok(Some(1)));

        {
            let guard = trie.read();
            assert_eq!(guard.find("route"), Some(&10));
            assert_eq!(guard.len(), 2);
        }

        let inner = trie.into_inner();
        assert_eq!(inner.find("route/users"), Some(&2));
    }

    /// Concurrent inserts from several threads, with readers checking their
    /// own keys as they go.
    #[test]
    fn test_shared_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;

        let trie = Arc::new(SharedKumuTrie::new());
        let start_barrier = Arc::new(Barrier::new(THREAD_COUNT));

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|thread_id| {
                let trie = Arc::clone(&trie);
                let barrier = Arc::clone(&start_barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for j in 0..OPS_PER_THREAD {
                        let key = format!("key_{thread_id}_{j}");
                        assert!(trie.insert(&key, thread_id * OPS_PER_THREAD + j));
                        assert_eq!(trie.find(&key), Some(thread_id * OPS_PER_THREAD + j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trie.len(), THREAD_COUNT * OPS_PER_THREAD);
        for thread_id in 0..THREAD_COUNT {
            for j in 0..OPS_PER_THREAD {
                let key = format!("key_{thread_id}_{j}");
                assert_eq!(trie.find(&key), Some(thread_id * OPS_PER_THREAD + j));
            }
        }
    }
}
