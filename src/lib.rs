//! Kumu Trie Library
//!
//! A compressed prefix tree (radix trie) with exact and prefix-chain lookups,
//! plus the configuration, error and logging plumbing around it.
//!
//! # Architecture
//!
//! - [`data_structures::kumu_trie`]: the trie engine and its locked wrapper
//! - [`config`]: file and environment driven settings
//! - [`error`]: crate-wide error types
//!
//! # Example
//!
//! ```
//! use kumu_trie::KumuTrie;
//!
//! let mut routes = KumuTrie::new();
//! routes.insert("/api", "api");
//! routes.insert("/api/users", "users");
//!
//! assert_eq!(routes.find_series("/api/users/42"), vec![&"api", &"users"]);
//! ```

use std::path::Path;

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::kumu_trie::{
    shared_prefix_len, KumuTrie, KumuTrieConfig, KumuTrieError, KumuTrieResult, Series,
    SharedKumuTrie, Traversal,
};

use crate::config::{ConfigLoader, KumuConfig, LogConfig};
use error::{KumuError, KumuResult};

/// Version information for the Kumu Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs a global `tracing` subscriber configured by `config`.
///
/// # Returns
///
/// * `Ok(())` if the subscriber was installed
/// * `Err(KumuError::Custom)` if the level is not a valid filter or a global
///   subscriber is already set
pub fn init_logging(config: &LogConfig) -> KumuResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| KumuError::Custom(format!("Invalid log filter '{}': {e}", config.level)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(config.source_location)
        .with_file(config.source_location);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| KumuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Library initialization function.
///
/// Loads configuration from `config_path` (defaults are used when the file
/// does not exist) with `KUMU__*` environment overrides, then sets up logging.
pub fn init(config_path: Option<&Path>) -> KumuResult<KumuConfig> {
    let config = ConfigLoader::new(config_path, crate::config::ENV_PREFIX).load_or_default()?;
    init_logging(&config.log)?;
    tracing::debug!(version = VERSION, "kumu_trie initialized");
    Ok(config)
}
