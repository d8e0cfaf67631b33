//! Line-oriented bulk loading.
//!
//! Reads one key per line and adds each to a [`LanaiTrie`]. The loader fails
//! fast on IO errors; lines rejected by the [`LoaderConfig`] are skipped and
//! counted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::data_structures::LanaiTrie;
use crate::error::LoadError;

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines consumed from the source
    pub lines_read: usize,

    /// Lines handed to the trie as keys
    pub keys_added: usize,

    /// Lines dropped by the loader configuration
    pub skipped: usize,
}

/// Feeds lines of a text source into a trie.
#[derive(Debug, Clone, Default)]
pub struct LineLoader {
    config: LoaderConfig,
}

impl LineLoader {
    /// Creates a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads every line of `reader` into `trie`.
    ///
    /// `payload` receives the 1-based line number and the key, and builds the
    /// value stored with that key.
    pub fn load_reader<T, R, F>(
        &self,
        trie: &LanaiTrie<T>,
        reader: R,
        mut payload: F,
    ) -> Result<LoadStats, LoadError>
    where
        R: BufRead,
        F: FnMut(usize, &str) -> T,
    {
        let mut stats = LoadStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| LoadError::Read {
                line: line_number,
                source,
            })?;
            stats.lines_read += 1;

            let key = if self.config.trim_whitespace {
                line.trim()
            } else {
                line.as_str()
            };

            if key.is_empty() && self.config.skip_empty_lines {
                stats.skipped += 1;
                continue;
            }

            if let Some(max) = self.config.max_key_chars {
                if key.chars().count() > max {
                    debug!(line = line_number, max, "skipping overlong key");
                    stats.skipped += 1;
                    continue;
                }
            }

            trie.add(key, payload(line_number, key));
            stats.keys_added += 1;
        }

        info!(
            lines_read = stats.lines_read,
            keys_added = stats.keys_added,
            skipped = stats.skipped,
            "bulk load finished"
        );
        Ok(stats)
    }

    /// Opens `path` and loads it with [`LineLoader::load_reader`].
    pub fn load_file<T, P, F>(
        &self,
        trie: &LanaiTrie<T>,
        path: P,
        payload: F,
    ) -> Result<LoadStats, LoadError>
    where
        P: AsRef<Path>,
        F: FnMut(usize, &str) -> T,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(?path, "loading keys");
        self.load_reader(trie, BufReader::new(file), payload)
    }
}
