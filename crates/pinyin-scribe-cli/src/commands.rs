//! Subcommand execution
//!
//! Every command produces one JSON value for stdout.

use serde::Serialize;
use serde_json::Value;

use pinyin_scribe::{ScribeConfig, ScribeService, ToneTable, apply_tone};

use crate::cli::Command;
use crate::errors::{CliError, Result};

/// Output of `tone`
#[derive(Debug, Serialize)]
struct ToneOutput<'a> {
  input: &'a str,
  tone: u8,
  result: String,
}

/// Output of `palette`
#[derive(Debug, Serialize)]
struct PaletteOutput {
  letter: char,
  forms: &'static [&'static str; 5],
}

/// Runs `command`
///
/// `tone` and `palette` never touch the reference data.
///
/// # Errors
/// - Unknown palette letter
/// - Invalid configuration
/// - Reference data could not be loaded
pub fn execute(command: &Command, config: &ScribeConfig) -> Result<Value> {
  match command {
    Command::Tone { text, tone } => to_json(&ToneOutput {
      input: text,
      tone: *tone,
      result: apply_tone(text, *tone),
    }),

    Command::Palette { letter } => {
      let forms = ToneTable::forms(*letter)
        .ok_or_else(|| CliError::invalid_input(format!("no tone forms for letter {letter:?}")))?;
      to_json(&PaletteOutput {
        letter: *letter,
        forms,
      })
    }

    Command::Lookup { query } => {
      let service = ScribeService::init(config)?;
      to_json(&service.lookup(query)?)
    }

    Command::Suggest { query, limit } => {
      let service = match limit {
        Some(0) => return Err(CliError::invalid_input("--limit must be at least 1")),
        Some(n) => {
          let mut config = config.clone();
          config.search.candidate_limit = *n;
          ScribeService::init(&config)?
        }
        None => ScribeService::init(config)?,
      };
      to_json(&service.suggest(query)?)
    }
  }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
  serde_json::to_value(value).map_err(|e| CliError::internal(e.to_string()))
}
