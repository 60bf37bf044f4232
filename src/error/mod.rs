//! Error module for the Kumu Trie crate.
//!
//! Trie operations report failure through plain return values; the types here
//! cover the fallible edges around them: configuration loading, logging setup
//! and the `try_*` forms of trie operations.

use thiserror::Error;

use crate::data_structures::kumu_trie::KumuTrieError;

pub mod config;

/// Result type alias used throughout the crate.
pub type KumuResult<T> = Result<T, KumuError>;

/// Core error enum for the Kumu Trie crate.
#[derive(Error, Debug)]
pub enum KumuError {
    /// Errors reported by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] KumuTrieError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while writing diagnostics.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
