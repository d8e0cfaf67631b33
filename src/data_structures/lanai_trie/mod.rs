// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie: an in-memory string index.
//!
//! Supports three query modes over the stored keys:
//!
//! - exact lookup ([`LanaiTrie::get`], [`LanaiTrie::contains`])
//! - prefix enumeration ([`LanaiTrie::prefix_search`], [`LanaiTrie::has_prefix`])
//! - subsequence matching ([`LanaiTrie::fuzzy_search`]), where `"fz"` matches
//!   `"foo/bart/baz.go"`
//!
//! Every node keeps a character mask summarizing its subtree, so fuzzy search
//! skips whole branches that cannot contain the unmatched part of the pattern.
//!
//! # Concurrency
//!
//! One reader-writer lock guards the whole tree. [`LanaiTrie::add`],
//! [`LanaiTrie::remove`] and [`LanaiTrie::clear`] take it exclusively; every
//! query shares it. All operations are synchronous and run to completion on
//! the calling thread.
//!
//! # Example
//!
//! ```
//! use lanai_index_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let trie = LanaiTrie::new();
//! trie.add("bfrza", 1);
//! trie.add("foo/bart/baz.go", 2);
//!
//! assert_eq!(trie.get("bfrza"), Some(1));
//! assert!(trie.has_prefix("foo/"));
//! assert_eq!(trie.fuzzy_search("fz"), vec!["bfrza", "foo/bart/baz.go"]);
//! ```

mod mask;
mod node;
pub mod ordering;
mod traverse;
mod tree;

use parking_lot::RwLock;

pub use mask::{CharMask, MASK_BITS};
use node::NodeId;
use tree::Tree;

/// Configuration options for the Lanai Trie.
#[derive(Debug, Clone)]
pub struct LanaiTrieConfig {
    /// Whether keys are compared case-sensitively. When `false`, keys,
    /// prefixes and patterns are lowercased and keys are stored lowercase.
    pub case_sensitive: bool,
}

impl LanaiTrieConfig {
    /// Sets case sensitivity.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Reference to a stored entry, returned by [`LanaiTrie::add`].
///
/// A handle is valid only while its key stays in the trie that issued it.
/// Resolving it after the key was removed, or against another trie, is a
/// caller error; the trie answers `None` rather than detecting it as a
/// recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle(NodeId);

/// Thread-safe string index with exact, prefix and fuzzy lookup.
///
/// # Type Parameters
///
/// * `T` - Payload attached to each key. Opaque to the trie.
#[derive(Debug)]
pub struct LanaiTrie<T> {
    /// The tree, guarded as a whole
    inner: RwLock<Tree<T>>,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl<T> LanaiTrie<T> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            inner: RwLock::new(Tree::new()),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    fn normalize(&self, key: &str) -> Vec<char> {
        if self.config.case_sensitive {
            key.chars().collect()
        } else {
            key.to_lowercase().chars().collect()
        }
    }

    /// Stores `key` with `payload`.
    ///
    /// Never fails; the empty string is a valid key. Adding a key that is
    /// already present replaces its payload, returns the same handle and does
    /// not change [`LanaiTrie::len`].
    pub fn add<K>(&self, key: K, payload: T) -> EntryHandle
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(key.as_ref());
        EntryHandle(self.inner.write().add(&chars, payload))
    }

    /// Calls `f` with the payload stored under `key` and returns its result.
    pub fn with_payload<K, R, F>(&self, key: K, f: F) -> Option<R>
    where
        K: AsRef<str>,
        F: FnOnce(&T) -> R,
    {
        let chars = self.normalize(key.as_ref());
        let tree = self.inner.read();
        tree.find_terminal(&chars)
            .and_then(|id| tree.payload(id))
            .map(f)
    }

    /// Returns `true` if `key` itself is stored.
    ///
    /// A key that is only a prefix of stored keys is not contained.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(key.as_ref());
        self.inner.read().find_terminal(&chars).is_some()
    }

    /// Returns `true` if at least one stored key starts with `prefix`.
    pub fn has_prefix<K>(&self, prefix: K) -> bool
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(prefix.as_ref());
        let tree = self.inner.read();
        tree.find_node(&chars)
            .is_some_and(|node| tree.arena[node].terminal_count > 0)
    }

    /// Removes `key`. Returns `false` if it was not stored, in which case the
    /// trie is left untouched.
    pub fn remove<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(key.as_ref());
        self.inner.write().remove(&chars)
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every key. Outstanding handles stop resolving.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// All stored keys, unordered. Same as `prefix_search("")`.
    pub fn keys(&self) -> Vec<String> {
        self.prefix_search("")
    }

    /// All stored keys starting with `prefix`, unordered. Empty when no key
    /// has that prefix.
    pub fn prefix_search<K>(&self, prefix: K) -> Vec<String>
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(prefix.as_ref());
        let tree = self.inner.read();
        match tree.find_node(&chars) {
            Some(start) => traverse::collect(&tree, start, &chars),
            None => Vec::new(),
        }
    }

    /// All stored keys containing `pattern` as a subsequence, shortest
    /// first (see [`ordering::by_length`]). An empty pattern matches every key.
    pub fn fuzzy_search<K>(&self, pattern: K) -> Vec<String>
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(pattern.as_ref());
        let mut keys = traverse::fuzzy_collect(&self.inner.read(), &chars);
        ordering::sort_by_length(&mut keys);
        keys
    }
}

impl<T: Clone> LanaiTrie<T> {
    /// Returns a copy of the payload stored under `key`.
    pub fn get<K>(&self, key: K) -> Option<T>
    where
        K: AsRef<str>,
    {
        self.with_payload(key, T::clone)
    }

    /// Looks up `key`, returning its payload and whether it was found.
    pub fn find<K>(&self, key: K) -> (Option<T>, bool)
    where
        K: AsRef<str>,
    {
        let payload = self.get(key);
        let found = payload.is_some();
        (payload, found)
    }

    /// Returns a copy of the payload behind `handle`.
    ///
    /// See [`EntryHandle`] for the validity precondition.
    pub fn payload(&self, handle: &EntryHandle) -> Option<T> {
        self.inner.read().payload(handle.0).cloned()
    }

    /// Keys starting with `prefix` together with their payloads, unordered.
    pub fn prefix_entries<K>(&self, prefix: K) -> Vec<(String, T)>
    where
        K: AsRef<str>,
    {
        let chars = self.normalize(prefix.as_ref());
        let tree = self.inner.read();
        let Some(start) = tree.find_node(&chars) else {
            return Vec::new();
        };

        let mut entries = Vec::with_capacity(tree.arena[start].terminal_count);
        traverse::visit_terminals(&tree, start, &chars, |key, node| {
            if let Some(payload) = &node.payload {
                entries.push((key, payload.clone()));
            }
        });
        entries
    }
}

impl<T> Default for LanaiTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
