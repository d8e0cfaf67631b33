//! Data structures for the Lanai index.
//!
//! This module contains the in-memory structures behind the index.
//! Implementations follow the project requirements:
//! - No unsafe code
//! - Explicit stacks instead of recursion on unbounded depth
//! - Compact, arena-backed node storage

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{EntryHandle, LanaiTrie, LanaiTrieConfig};
