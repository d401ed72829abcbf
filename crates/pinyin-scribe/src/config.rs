// crates/pinyin-scribe/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::dictionary::FsLevelSource;
use crate::errors::ConfigError;
use crate::searcher::DEFAULT_CANDIDATE_LIMIT;

/// Top-level configuration for pinyin-scribe.
///
/// Every section may be omitted in TOML; missing values take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
  /// [data] section
  pub data: DataConfig,
  /// [search] section
  pub search: SearchConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [data] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
  /// Directory holding the level files.
  ///
  /// If omitted, `<platform data dir>/pinyin-scribe/levels` is used.
  pub data_dir: Option<PathBuf>,
  /// Number of proficiency levels (files `1..=levels`)
  pub levels: u8,
  /// File name prefix (`hsk` → `hsk1.json`)
  pub file_prefix: String,
}

impl Default for DataConfig {
  fn default() -> Self {
    Self {
      data_dir: None,
      levels: FsLevelSource::DEFAULT_LEVELS,
      file_prefix: FsLevelSource::DEFAULT_PREFIX.to_string(),
    }
  }
}

/// [search] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Maximum number of candidates returned by `suggest`
  pub candidate_limit: usize,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      candidate_limit: DEFAULT_CANDIDATE_LIMIT,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing` filters
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ===== Loading =====

impl ScribeConfig {
  /// Parses a configuration from TOML text.
  ///
  /// # Errors
  /// `ConfigError::ParseFailed` if the text is not valid for this schema.
  pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseFailed {
      reason: e.to_string(),
    })
  }

  /// Reads and parses a TOML configuration file.
  ///
  /// The result is not validated; call [`ScribeConfig::validate`] before use.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_toml_str(&text)
  }
}

// ===== Accessor Methods =====

impl ScribeConfig {
  /// Returns the directory holding the level files.
  ///
  /// Falls back to `<platform data dir>/pinyin-scribe/levels` when
  /// `data.data_dir` is not set.
  ///
  /// # Errors
  /// `ConfigError::DataDirNotFound` if nothing is configured and the platform
  /// has no data directory.
  pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
    match &self.data.data_dir {
      Some(dir) => Ok(dir.clone()),
      None => dirs::data_dir()
        .map(|base| base.join("pinyin-scribe").join("levels"))
        .ok_or(ConfigError::DataDirNotFound),
    }
  }

  /// Builds the file system level source described by the [data] section.
  pub fn level_source(&self) -> Result<FsLevelSource, ConfigError> {
    let data_dir = self.resolved_data_dir()?;
    Ok(FsLevelSource::with_layout(
      data_dir,
      self.data.file_prefix.clone(),
      self.data.levels,
    ))
  }

  /// Returns the candidate limit for `suggest`.
  pub fn candidate_limit(&self) -> usize {
    self.search.candidate_limit
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `data.levels` >= 1
  /// - `data.file_prefix` is not empty
  /// - `search.candidate_limit` >= 1
  /// - `data.data_dir`, if it exists, is a directory
  ///
  /// A missing data directory is accepted here; it surfaces as
  /// `DataLoadError::NotFound` on the first load.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.data.levels < 1 {
      return Err(ConfigError::NoLevels);
    }

    if self.data.file_prefix.trim().is_empty() {
      return Err(ConfigError::EmptyFilePrefix);
    }

    if self.search.candidate_limit < 1 {
      return Err(ConfigError::InvalidCandidateLimit {
        actual: self.search.candidate_limit,
      });
    }

    if let Some(dir) = &self.data.data_dir
      && dir.exists()
      && !dir.is_dir()
    {
      return Err(ConfigError::InvalidDataDir { path: dir.clone() });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::LevelSource;
  use tempfile::TempDir;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  /// Creates a valid configuration pointing at a temporary directory
  fn create_valid_config(temp_dir: &TempDir) -> ScribeConfig {
    ScribeConfig {
      data: DataConfig {
        data_dir: Some(temp_dir.path().to_path_buf()),
        levels: 6,
        file_prefix: "hsk".to_string(),
      },
      search: SearchConfig { candidate_limit: 10 },
      logging: LoggingConfig {
        level: LogLevel::Info,
      },
    }
  }

  // ─── Parsing ──────────────────────────────────────────────────────────

  #[test]
  fn empty_toml_gives_defaults() {
    let config = ScribeConfig::from_toml_str("").unwrap();

    assert_eq!(config.data.levels, 6);
    assert_eq!(config.data.file_prefix, "hsk");
    assert!(config.data.data_dir.is_none());
    assert_eq!(config.candidate_limit(), DEFAULT_CANDIDATE_LIMIT);
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn full_toml_is_parsed() {
    let config = ScribeConfig::from_toml_str(
      r#"
        [data]
        data_dir = "/srv/hsk"
        levels = 3
        file_prefix = "level"

        [search]
        candidate_limit = 5

        [logging]
        level = "debug"
      "#,
    )
    .unwrap();

    assert_eq!(config.data.data_dir.as_deref(), Some(Path::new("/srv/hsk")));
    assert_eq!(config.data.levels, 3);
    assert_eq!(config.data.file_prefix, "level");
    assert_eq!(config.candidate_limit(), 5);
    assert_eq!(config.log_level(), LogLevel::Debug);
  }

  #[test]
  fn unknown_log_level_is_rejected() {
    let err = ScribeConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed { .. }));
  }

  #[test]
  fn from_file_reads_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scribe.toml");
    fs::write(&path, "[search]\ncandidate_limit = 3\n").unwrap();

    let config = ScribeConfig::from_file(&path).unwrap();
    assert_eq!(config.candidate_limit(), 3);
  }

  #[test]
  fn from_file_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    match ScribeConfig::from_file(&path).unwrap_err() {
      ConfigError::ReadFailed { path: reported, .. } => assert_eq!(reported, path),
      other => panic!("expected ReadFailed, got {other:?}"),
    }
  }

  // ─── Accessors ────────────────────────────────────────────────────────

  #[test]
  fn level_source_follows_data_section() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.data.file_prefix = "lvl".to_string();
    config.data.levels = 2;

    let source = config.level_source().unwrap();
    assert_eq!(source.level_count(), 2);
    assert_eq!(source.level_path(1), temp_dir.path().join("lvl1.json"));
  }

  #[test]
  fn configured_data_dir_wins_over_platform_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);
    assert_eq!(config.resolved_data_dir().unwrap(), temp_dir.path());
  }

  #[test]
  fn log_level_display() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.as_str(), "trace");
  }

  // ─── validate() ───────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);

    assert!(config.validate().is_ok(), "valid config should pass validation");
  }

  #[test]
  fn validate_accepts_missing_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.data.data_dir = Some(temp_dir.path().join("not-yet"));

    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_zero_levels() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.data.levels = 0;

    assert!(matches!(config.validate().unwrap_err(), ConfigError::NoLevels));
  }

  #[test]
  fn validate_rejects_blank_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.data.file_prefix = "  ".to_string();

    assert!(matches!(config.validate().unwrap_err(), ConfigError::EmptyFilePrefix));
  }

  #[test]
  fn validate_rejects_zero_candidate_limit() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.search.candidate_limit = 0;

    match config.validate().unwrap_err() {
      ConfigError::InvalidCandidateLimit { actual } => assert_eq!(actual, 0),
      other => panic!("expected InvalidCandidateLimit, got {other:?}"),
    }
  }

  #[test]
  fn validate_rejects_file_as_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hsk1.json");
    fs::write(&file, "[]").unwrap();

    let mut config = create_valid_config(&temp_dir);
    config.data.data_dir = Some(file.clone());

    match config.validate().unwrap_err() {
      ConfigError::InvalidDataDir { path } => assert_eq!(path, file),
      other => panic!("expected InvalidDataDir, got {other:?}"),
    }
  }

  #[test]
  fn validate_checks_levels_before_limit() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.data.levels = 0;
    config.search.candidate_limit = 0;

    assert!(matches!(config.validate().unwrap_err(), ConfigError::NoLevels));
  }
}
