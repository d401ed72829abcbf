//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Merged dictionary record, keyed by `word`
///
/// Serialized with the field names of the reference data
/// (`pinyin`, `meaning`, `traditional`) so collaborators see the same shape
/// as the source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
  /// Chinese characters; unique key of the dictionary
  pub word: String,

  /// Space separated syllables, one per character
  #[serde(rename = "pinyin")]
  pub romanization: String,

  /// Glosses in order of significance
  #[serde(rename = "meaning")]
  pub meanings: Vec<String>,

  /// Display-ready example: `"{hanzi} ({pinyin}) - {meaning}"`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub example: Option<String>,

  /// Alternate orthographic form (e.g. traditional characters)
  #[serde(default, rename = "traditional", skip_serializing_if = "Option::is_none")]
  pub variant: Option<String>,
}

/// Implementation block for DictionaryEntry
impl DictionaryEntry {
  /// Constructor with a single gloss and no example or variant
  pub fn new(
    word: impl Into<String>,
    romanization: impl Into<String>,
    meaning: impl Into<String>,
  ) -> Self {
    Self {
      word: word.into(),
      romanization: romanization.into(),
      meanings: vec![meaning.into()],
      example: None,
      variant: None,
    }
  }

  /// Builder that sets the formatted example
  #[must_use]
  pub fn with_example(mut self, example: impl Into<String>) -> Self {
    self.example = Some(example.into());
    self
  }

  /// Builder that sets the alternate form
  #[must_use]
  pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
    self.variant = Some(variant.into());
    self
  }

  /// Builder that appends another gloss
  #[must_use]
  pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
    self.meanings.push(meaning.into());
    self
  }

  /// Glosses joined with single spaces, the form the free-text search scores against
  pub fn joined_meanings(&self) -> String {
    self.meanings.join(" ")
  }
}

/// Tier a candidate matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
  /// Whole pinyin or one syllable equals the query
  Exact,
  /// Whole pinyin or one syllable starts with the query
  Partial,
  /// Syllable initials start with the query letters
  Shorthand,
}

impl std::fmt::Display for MatchType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      MatchType::Exact => "exact",
      MatchType::Partial => "partial",
      MatchType::Shorthand => "shorthand",
    };
    f.write_str(name)
  }
}

/// Character candidate for a typed pinyin query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
  /// Matched dictionary entry
  #[serde(flatten)]
  pub entry: DictionaryEntry,

  /// Tier the entry matched in
  pub match_type: MatchType,

  /// True only for shorthand-tier candidates
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub is_shorthand: bool,

  /// Number of syllables in the entry's pinyin
  pub syllable_count: usize,
}

impl Candidate {
  /// Builds a candidate; `is_shorthand` follows from the tier
  pub fn new(entry: DictionaryEntry, match_type: MatchType, syllable_count: usize) -> Self {
    Self {
      entry,
      match_type,
      is_shorthand: match_type == MatchType::Shorthand,
      syllable_count,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
