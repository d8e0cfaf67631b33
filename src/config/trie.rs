//! Trie configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::LanaiTrieConfig;
use serde::{Deserialize, Serialize};

/// Trie settings as they appear in configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Whether keys are matched case-sensitively
    pub case_sensitive: bool,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl From<&TrieSettings> for LanaiTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        LanaiTrieConfig::default().with_case_sensitive(settings.case_sensitive)
    }
}
