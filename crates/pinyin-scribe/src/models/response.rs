//! Response Model Definition
//!
//! Envelopes handed to a transport layer: the ordered results plus their count.
//! An empty result is a normal response with `count == 0`, never an error.

use serde::Serialize;

use super::model_definition::{Candidate, DictionaryEntry};

/// Free-text dictionary lookup response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResponse {
  /// Ranked entries
  pub results: Vec<DictionaryEntry>,
  /// Number of entries in `results`
  pub count: usize,
}

impl LookupResponse {
  /// Wraps ranked entries
  pub fn new(results: Vec<DictionaryEntry>) -> Self {
    let count = results.len();
    Self { results, count }
  }

  /// Response for a blank query
  pub fn empty() -> Self {
    Self::new(Vec::new())
  }
}

/// Character suggestion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
  /// Ranked candidates
  pub results: Vec<Candidate>,
  /// Number of candidates in `results`
  pub count: usize,
  /// Whether the normalized query was read as syllable initials
  pub is_shorthand: bool,
}

impl SuggestResponse {
  /// Wraps ranked candidates
  pub fn new(results: Vec<Candidate>, is_shorthand: bool) -> Self {
    let count = results.len();
    Self {
      results,
      count,
      is_shorthand,
    }
  }

  /// Response for a blank query
  pub fn empty() -> Self {
    Self::new(Vec::new(), false)
  }
}
