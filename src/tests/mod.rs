//! Test modules for the Kumu Trie crate.
//!
//! This module contains the crate-internal test suite:
//! - Property-based equivalence tests against a `BTreeMap` model
//! - Structural invariant checks on the trie
//! - Configuration loading and validation tests
//! - Error conversion and display tests


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, key_strategy, ops_strategy, validate_trie, Op, TestFixture};
