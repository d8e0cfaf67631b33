//! Test modules for the Lanai index.
//!
//! This module contains the crate-level testing infrastructure:
//! - Scenario tests for the trie facade
//! - Property-based tests using proptest
//! - Configuration and error handling tests
//! - Test fixtures and utilities

pub mod config_tests;
pub mod lanai_trie_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, is_subsequence, key_set_strategy, key_strategy, TestFixture};
