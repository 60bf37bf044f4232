// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Kumu Trie.

use serde::{Deserialize, Serialize};

use super::error::{KumuTrieError, KumuTrieResult};

/// Largest indentation step accepted for the debug traversal.
const MAX_INDENT_WIDTH: usize = 16;

/// Configuration for the Kumu Trie.
///
/// Only the diagnostic rendering is tunable; lookup and insertion semantics
/// are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KumuTrieConfig {
    /// Render siblings in ascending branching-byte order in the debug
    /// traversal. When disabled, edge-map iteration order is used.
    pub sorted_traversal: bool,

    /// Spaces of indentation per depth level in the debug traversal
    pub indent_width: usize,
}

impl KumuTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - sorted_traversal: true
    /// - indent_width: 2
    pub fn new() -> Self {
        Self {
            sorted_traversal: true,
            indent_width: 2,
        }
    }

    /// Enable or disable sorted sibling order in the debug traversal.
    pub fn with_sorted_traversal(mut self, sorted_traversal: bool) -> Self {
        self.sorted_traversal = sorted_traversal;
        self
    }

    /// Set the number of spaces used per depth level in the debug traversal.
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Check that every setting is within its valid range.
    pub fn validate(&self) -> KumuTrieResult<()> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(KumuTrieError::InvalidConfiguration(format!(
                "indent_width must be between 1 and {MAX_INDENT_WIDTH}, got {}",
                self.indent_width
            )));
        }
        Ok(())
    }
}

impl Default for KumuTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = KumuTrieConfig::default();
        assert!(config.sorted_traversal);
        assert_eq!(config.indent_width, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_indent_width_bounds() {
        assert!(KumuTrieConfig::new().with_indent_width(0).validate().is_err());
        assert!(KumuTrieConfig::new().with_indent_width(17).validate().is_err());
        assert!(KumuTrieConfig::new().with_indent_width(16).validate().is_ok());
    }
}
