//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors related to the configuration (`ScribeConfig`)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// data.levels is 0
  #[error("data.levels must be at least 1")]
  NoLevels,

  /// data.file_prefix is empty
  #[error("data.file_prefix must not be empty")]
  EmptyFilePrefix,

  /// search.candidate_limit < 1
  #[error("search.candidate_limit must be at least 1: actual={actual}")]
  InvalidCandidateLimit {
    /// Value actually specified
    actual: usize,
  },

  /// data.data_dir exists but is not a directory
  #[error("data.data_dir is not a directory: path={path:?}")]
  InvalidDataDir {
    /// Offending path
    path: PathBuf,
  },

  /// No data directory was configured and the platform has no data directory
  #[error("could not determine a reference data directory")]
  DataDirNotFound,

  /// Reading the configuration file failed
  #[error("failed to read config file: path={path:?}, error={source}")]
  ReadFailed {
    /// Path of the configuration file
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The configuration file is not valid TOML for `ScribeConfig`
  #[error("failed to parse config: {reason}")]
  ParseFailed {
    /// Parser message
    reason: String,
  },
}

/// Errors raised while building the reference dictionary
///
/// Fatal to a single `ReferenceDataStore::load` call. Nothing is cached on
/// failure, so the next call starts the whole load again.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DataLoadError {
  /// The level file does not exist
  #[error("reference data file for level {level} not found: {path:?}")]
  NotFound {
    /// Proficiency level of the file
    level: u8,
    /// Expected path
    path: PathBuf,
  },

  /// The level file exists but could not be read
  #[error("failed to read reference data file for level {level}: path={path:?}, error={source}")]
  Io {
    /// Proficiency level of the file
    level: u8,
    /// Path that was read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The level file could not be parsed into records
  #[error("malformed reference data for level {level}: {reason}")]
  Malformed {
    /// Proficiency level of the file
    level: u8,
    /// What was wrong with it
    reason: String,
  },
}

/// Unified error
///
/// Public APIs of this crate return this error through `ScribeResult<T>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ScribeError {
  /// Reference data loading error
  #[error(transparent)]
  DataLoad(#[from] DataLoadError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard `Result` alias of the pinyin-scribe crate
pub type ScribeResult<T> = Result<T, ScribeError>;
