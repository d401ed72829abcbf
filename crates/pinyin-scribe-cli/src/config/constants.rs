//! CLI configuration constants

/// Environment variable naming a TOML configuration file
pub const ENV_CONFIG_PATH: &str = "PINYIN_SCRIBE_CONFIG";

/// Environment variable overriding `data.data_dir`
pub const ENV_DATA_DIR: &str = "PINYIN_SCRIBE_DATA_DIR";

/// Environment variable holding a `tracing` filter directive
///
/// When unset, the configured `logging.level` is used.
pub const ENV_LOG_FILTER: &str = "RUST_LOG";
