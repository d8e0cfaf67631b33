//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    global_config, init_global_config, ConfigLoader, IndexConfig, LoaderConfig, LogConfig,
    TrieSettings, Validate,
};
use crate::data_structures::LanaiTrieConfig;
use crate::error::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = IndexConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.trie.case_sensitive);
    assert!(config.loader.path.is_none());
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = IndexConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.log.level = "debug".to_string();
    config.loader.max_key_chars = Some(0);
    assert!(config.validate().is_err());

    config.loader.max_key_chars = Some(64);
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [trie]
    case_sensitive = false

    [loader]
    path = "/srv/words.txt"
    max_key_chars = 32

    [log]
    level = "debug"
    "#,
        )
        .unwrap();

    // Load the configuration with a unique prefix
    let config = ConfigLoader::new(Some(&config_path), "TEST_FILE").load().unwrap();

    assert!(!config.trie.case_sensitive);
    assert_eq!(
        config.loader.path.as_deref(),
        Some(std::path::Path::new("/srv/words.txt"))
    );
    assert_eq!(config.loader.max_key_chars, Some(32));
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(config.loader.trim_whitespace);
    assert!(!config.log.json);
}

/// Test loading a partial JSON configuration.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "log": { "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert!(config.log.json);
    assert!(config.trie.case_sensitive);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
    [log]
    level = "warn"
    "#,
        )
        .unwrap();

    // Set environment variables with a unique prefix
    fixture.set_env("TEST_ENV__LOG__LEVEL", "trace");
    fixture.set_env("TEST_ENV__LOADER__SKIP_EMPTY_LINES", "false");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.log.level, "trace");
    assert!(!config.loader.skip_empty_lines);
}

/// Test that an environment override is validated like file values.
#[test]
fn test_env_var_override_is_validated() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_ENV_INVALID__LOG__LEVEL", "loud");

    let result = ConfigLoader::new(None::<&std::path::Path>, "TEST_ENV_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [trie
    case_sensitive = maybe"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a missing file and an unknown extension are rejected.
#[test]
fn test_load_missing_and_unsupported() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("absent.toml");
    let result = ConfigLoader::new(Some(&missing), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let ini = fixture.create_file("config.ini", "[log]\n").unwrap();
    let result = ConfigLoader::new(Some(&ini), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that validation fails for various invalid configurations.
#[test]
fn test_specific_validation_rules() {
    let log = LogConfig {
        level: "INFO".to_string(),
        ..LogConfig::default()
    };
    assert!(log.validate().is_err());

    let loader = LoaderConfig::default().with_max_key_chars(0);
    assert!(loader.validate().is_err());

    assert!(TrieSettings::default().validate().is_ok());
}

/// Test the conversion from file settings to the trie configuration.
#[test]
fn test_trie_settings_conversion() {
    let settings = TrieSettings {
        case_sensitive: false,
    };
    let config = LanaiTrieConfig::from(&settings);
    assert!(!config.case_sensitive);
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_toml() {
    let rendered = toml::to_string_pretty(&IndexConfig::default()).unwrap();
    let parsed: IndexConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.log.level, "info");
    assert!(parsed.loader.path.is_none());
}

/// Test that the global configuration is set once.
#[test]
fn test_global_config_first_wins() {
    let mut config = IndexConfig::default();
    config.log.level = "error".to_string();
    init_global_config(config);

    let mut other = IndexConfig::default();
    other.log.level = "trace".to_string();
    assert!(!init_global_config(other));

    let global = global_config().unwrap();
    assert_eq!(global.log.level, "error");
}
