//! Lanai Index - command line harness.
//!
//! Loads a word list into a trie and answers one query against it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use lanai_index_lib::config::{self, ConfigLoader, IndexConfig, LogConfig};
use lanai_index_lib::data_structures::{LanaiTrie, LanaiTrieConfig};
use lanai_index_lib::error::{
    report_error, set_error_reporter, ConfigError, ErrorContext, IndexError, IndexResult,
    TracingErrorReporter,
};
use lanai_index_lib::loader::LineLoader;

/// Command line arguments for the Lanai index.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Key source, one key per line (overrides `loader.path`)
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List every stored key
    Keys,

    /// Look up one exact key and print its line number
    Find {
        /// Key to look up
        key: String,
    },

    /// List keys starting with a prefix
    Prefix {
        /// Prefix to search for
        prefix: String,
    },

    /// List keys containing a pattern as a subsequence, shortest first
    Fuzzy {
        /// Pattern whose characters must appear in order
        pattern: String,

        /// Maximum number of results
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct FindOutput<'a> {
    key: &'a str,
    found: bool,
    line: Option<usize>,
}

/// Initialize the logging system. Logs go to stderr so stdout carries only results.
fn init_logging(log: &LogConfig) -> IndexResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| IndexError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the trie from `--input` or the configured key source.
fn build_index(args: &Args, config: &IndexConfig) -> anyhow::Result<LanaiTrie<usize>> {
    let path = args
        .input
        .clone()
        .or_else(|| config.loader.path.clone())
        .ok_or_else(|| anyhow!("no key source; pass --input or set loader.path"))?;

    let trie = LanaiTrie::with_config(LanaiTrieConfig::from(&config.trie));
    let loader = LineLoader::new(config.loader.clone());
    if let Err(e) = loader.load_file(&trie, &path, |line, _| line) {
        let message = e.to_string();
        report_error(
            &ErrorContext::new(IndexError::Load(e), "loader")
                .with_details(format!("source: {}", path.display())),
        );
        return Err(anyhow!(message));
    }

    info!(keys = trie.len(), "index ready");
    Ok(trie)
}

fn write_keys(keys: &[String], json: bool) -> IndexResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer(&mut out, keys)?;
        writeln!(out)?;
    } else {
        for key in keys {
            writeln!(out, "{key}")?;
        }
    }
    Ok(())
}

fn write_find(key: &str, line: Option<usize>, json: bool) -> IndexResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let output = FindOutput {
            key,
            found: line.is_some(),
            line,
        };
        serde_json::to_writer(&mut out, &output)?;
        writeln!(out)?;
    } else if let Some(line) = line {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn gen_config(output: &Path) -> IndexResult<()> {
    let default_config = IndexConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteError {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| ConfigError::ParseError(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml).map_err(|source| ConfigError::WriteError {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;
        gen_config(output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX)
        .load()
        .context("loading configuration")?;
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    config::init_global_config(config.clone());

    match &args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(ExitCode::SUCCESS)
        }
        Command::Keys => {
            let mut keys = build_index(&args, &config)?.keys();
            keys.sort();
            write_keys(&keys, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Find { key } => {
            let line = build_index(&args, &config)?.get(key);
            write_find(key, line, args.json)?;
            Ok(if line.is_some() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Prefix { prefix } => {
            let mut keys = build_index(&args, &config)?.prefix_search(prefix);
            keys.sort();
            write_keys(&keys, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Fuzzy { pattern, limit } => {
            let mut keys = build_index(&args, &config)?.fuzzy_search(pattern);
            if let Some(limit) = limit {
                keys.truncate(*limit);
            }
            write_keys(&keys, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig { .. } => Ok(ExitCode::SUCCESS),
    }
}
