// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Kumu Trie.

/// Errors that can occur in Kumu Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KumuTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// The trie has an invalid configuration
    #[error("Invalid trie configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for Kumu Trie operations
pub type KumuTrieResult<T> = Result<T, KumuTrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KumuTrieError::EmptyKey;
        assert_eq!(err.to_string(), "Empty key not allowed");

        let err = KumuTrieError::InvalidConfiguration("indent_width must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid trie configuration: indent_width must be positive"
        );
    }
}
