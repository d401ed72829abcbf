//! Config loading from flags and environment variables
//!
//! Precedence, highest first: command-line flag, environment variable,
//! configuration file, built-in default.

use std::path::PathBuf;

use pinyin_scribe::ScribeConfig;

use super::constants::{ENV_CONFIG_PATH, ENV_DATA_DIR};
use crate::errors::{CliError, Result};

/// Values that override the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
  /// Configuration file to read
  pub config_path: Option<PathBuf>,
  /// Level file directory
  pub data_dir: Option<PathBuf>,
}

impl ConfigOverrides {
  /// Reads the overrides from environment variables
  pub fn from_env() -> Self {
    Self {
      config_path: std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from),
      data_dir: std::env::var_os(ENV_DATA_DIR).map(PathBuf::from),
    }
  }

  /// Fills unset values from `fallback`
  #[must_use]
  pub fn or(self, fallback: Self) -> Self {
    Self {
      config_path: self.config_path.or(fallback.config_path),
      data_dir: self.data_dir.or(fallback.data_dir),
    }
  }
}

/// Builds and validates the configuration
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed, or
/// the result does not validate.
pub fn load_config(overrides: ConfigOverrides) -> Result<ScribeConfig> {
  let mut config = match &overrides.config_path {
    Some(path) => ScribeConfig::from_file(path).map_err(|e| CliError::config(e.to_string()))?,
    None => ScribeConfig::default(),
  };

  if let Some(dir) = overrides.data_dir {
    config.data.data_dir = Some(dir);
  }

  config.validate().map_err(|e| CliError::config(e.to_string()))?;
  Ok(config)
}
