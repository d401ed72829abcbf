//! CLI error definitions

use serde::Serialize;
use thiserror::Error;

use pinyin_scribe::errors::ScribeError;

/// Error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
  /// Invalid argument value
  InvalidInput,
  /// Invalid or unreadable configuration
  Config,
  /// Engine fault (reference data could not be loaded)
  Internal,
}

impl CliErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::Config => "config_error",
      Self::Internal => "internal_error",
    }
  }

  /// Returns the process exit code
  #[must_use]
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::InvalidInput => 2,
      Self::Config => 3,
      Self::Internal => 1,
    }
  }
}

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
  /// Invalid argument value
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// Configuration error
  #[error("config error: {0}")]
  Config(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),
}

/// `Result` alias of the CLI
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> CliErrorKind {
    match self {
      Self::InvalidInput(_) => CliErrorKind::InvalidInput,
      Self::Config(_) => CliErrorKind::Config,
      Self::Internal(_) => CliErrorKind::Internal,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// JSON body printed on stdout for this error
  ///
  /// Internal errors never expose their detail; it goes to the log instead.
  pub fn to_body(&self) -> serde_json::Value {
    match self.kind() {
      CliErrorKind::Internal => serde_json::json!({ "error": "internal error" }),
      _ => serde_json::to_value(ErrorResponse {
        error: ErrorBody {
          code: self.code(),
          message: self.to_string(),
        },
      })
      .unwrap_or_else(|_| serde_json::json!({ "error": self.code() })),
    }
  }
}

/// Error response JSON structure
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

/// ScribeError to CliError conversion
///
/// A failed reference data load is an engine fault; configuration problems
/// are reported as they are.
impl From<ScribeError> for CliError {
  fn from(err: ScribeError) -> Self {
    match err {
      ScribeError::Config(e) => Self::Config(e.to_string()),
      other => Self::Internal(other.to_string()),
    }
  }
}
