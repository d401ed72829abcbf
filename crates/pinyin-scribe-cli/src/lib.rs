//! pinyin-scribe command-line front end
//!
//! Renders the engine's responses as JSON on stdout; logs go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

pub use cli::{Cli, Command};
pub use errors::{CliError, CliErrorKind};
