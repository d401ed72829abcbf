//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Pinyin tone placement and HSK dictionary search
#[derive(Debug, Parser)]
#[command(name = "pinyin-scribe", version, about)]
pub struct Cli {
  /// TOML configuration file (overrides PINYIN_SCRIBE_CONFIG)
  #[arg(long, short = 'c', global = true)]
  pub config: Option<PathBuf>,

  /// Directory holding the level files (overrides PINYIN_SCRIBE_DATA_DIR)
  #[arg(long, global = true)]
  pub data_dir: Option<PathBuf>,

  /// Subcommand to run
  #[command(subcommand)]
  pub command: Command,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
  /// Place a tone mark on a syllable
  Tone {
    /// Syllable, e.g. `hao` or `hao3`
    text: String,
    /// Tone number; anything outside 1-4 leaves the text unchanged
    tone: u8,
  },

  /// Free-text dictionary lookup (characters, pinyin or English)
  Lookup {
    /// Query text
    query: String,
  },

  /// Character candidates for typed pinyin
  Suggest {
    /// Pinyin or syllable initials, e.g. `ni hao` or `nh`
    query: String,

    /// Maximum number of candidates (defaults to search.candidate_limit)
    #[arg(long, short = 'n')]
    limit: Option<usize>,
  },

  /// Tone forms of one letter
  Palette {
    /// Base letter: a, e, i, o, u, ü (or v), n, m
    letter: char,
  },
}

impl Cli {
  /// Overrides given on the command line
  pub fn overrides(&self) -> ConfigOverrides {
    ConfigOverrides {
      config_path: self.config.clone(),
      data_dir: self.data_dir.clone(),
    }
  }
}
