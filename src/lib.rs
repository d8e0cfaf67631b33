//! Lanai Index Library
//!
//! An in-memory associative index over string keys with three query modes:
//! exact lookup, prefix enumeration and subsequence (fuzzy) matching. Built for
//! autocomplete, command-palette filtering and dictionary lookup over tens of
//! thousands to millions of keys.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie and its traversals
//! - [`loader`] bulk loads keys from line-oriented sources
//! - [`config`] layers defaults, files and environment variables
//! - [`error`] defines the error types used at the edges

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and returns the validated default
/// configuration merged with `LANAI__*` environment overrides.
pub fn init() -> error::IndexResult<config::IndexConfig> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    let loader = config::ConfigLoader::new(None::<&std::path::Path>, config::ENV_PREFIX);
    Ok(loader.load()?)
}
