//! Bulk loader configuration module.
//!
//! Controls how lines of a key source are turned into keys.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Line loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Default key source, one key per line
    pub path: Option<PathBuf>,

    /// Whether surrounding whitespace is stripped from each line
    pub trim_whitespace: bool,

    /// Whether empty lines are skipped instead of stored as the empty key
    pub skip_empty_lines: bool,

    /// Lines longer than this many characters are skipped
    pub max_key_chars: Option<usize>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            path: None,
            trim_whitespace: true,
            skip_empty_lines: true,
            max_key_chars: None,
        }
    }
}

impl LoaderConfig {
    /// Sets whether lines are trimmed.
    pub fn with_trim_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }

    /// Sets whether empty lines are skipped.
    pub fn with_skip_empty_lines(mut self, skip_empty_lines: bool) -> Self {
        self.skip_empty_lines = skip_empty_lines;
        self
    }

    /// Sets the maximum key length in characters.
    pub fn with_max_key_chars(mut self, max_key_chars: usize) -> Self {
        self.max_key_chars = Some(max_key_chars);
        self
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_chars == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_key_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
