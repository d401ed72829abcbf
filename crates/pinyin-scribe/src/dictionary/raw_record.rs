//! Raw reference records
//!
//! Shape of one record in a level file:
//!
//! ```json
//! {
//!   "id": "hsk1-001",
//!   "index": 1,
//!   "word": { "hanzi": "爱", "pinyin": "ài" },
//!   "meaning": "to love",
//!   "example": { "hanzi": "我爱你", "pinyin": "wǒ ài nǐ", "meaning": "I love you" }
//! }
//! ```

use serde::Deserialize;

use crate::errors::DataLoadError;
use crate::models::DictionaryEntry;

/// One record of a level file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
  /// Record identifier
  #[serde(default)]
  pub id: String,

  /// Ordering index within the level
  #[serde(default)]
  pub index: u32,

  /// Headword
  pub word: RawWord,

  /// Single gloss
  pub meaning: String,

  /// Example sentence, absent or `null` when the record has none
  #[serde(default)]
  pub example: Option<RawExample>,
}

/// Headword of a raw record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawWord {
  /// Chinese characters
  #[serde(rename = "hanzi")]
  pub script: String,

  /// Tone-marked pinyin
  #[serde(rename = "pinyin")]
  pub romanization: String,
}

/// Example sentence of a raw record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawExample {
  /// Example in Chinese characters
  #[serde(rename = "hanzi")]
  pub script: String,

  /// Example pinyin
  #[serde(rename = "pinyin")]
  pub romanization: String,

  /// Example translation
  #[serde(rename = "meaning")]
  pub gloss: String,
}

impl RawExample {
  /// Display form: `"{hanzi} ({pinyin}) - {meaning}"`
  pub fn formatted(&self) -> String {
    format!("{} ({}) - {}", self.script, self.romanization, self.gloss)
  }
}

impl RawRecord {
  /// Converts the raw record into a dictionary entry
  pub fn into_entry(self) -> DictionaryEntry {
    let example = self.example.as_ref().map(RawExample::formatted);
    DictionaryEntry {
      word: self.word.script,
      romanization: self.word.romanization,
      meanings: vec![self.meaning],
      example,
      variant: None,
    }
  }
}

/// Parses the contents of one level file
///
/// The file must be a JSON array of records, and every record needs a
/// non-empty `word.hanzi`. A single bad record fails the whole level.
pub fn parse_level(level: u8, content: &str) -> Result<Vec<RawRecord>, DataLoadError> {
  let records: Vec<RawRecord> =
    serde_json::from_str(content).map_err(|e| DataLoadError::Malformed {
      level,
      reason: e.to_string(),
    })?;

  if let Some(position) = records.iter().position(|r| r.word.script.trim().is_empty()) {
    return Err(DataLoadError::Malformed {
      level,
      reason: format!("record #{position} has an empty word.hanzi"),
    });
  }

  Ok(records)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn parses_full_record() {
    let content = json!([{
      "id": "hsk1-1",
      "index": 1,
      "word": { "hanzi": "爱", "pinyin": "ài" },
      "meaning": "to love",
      "example": { "hanzi": "我爱你", "pinyin": "wǒ ài nǐ", "meaning": "I love you" }
    }])
    .to_string();

    let records = parse_level(1, &content).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "hsk1-1");

    let entry = records[0].clone().into_entry();
    assert_eq!(entry.word, "爱");
    assert_eq!(entry.romanization, "ài");
    assert_eq!(entry.meanings, vec!["to love".to_string()]);
    assert_eq!(entry.example.as_deref(), Some("我爱你 (wǒ ài nǐ) - I love you"));
    assert!(entry.variant.is_none());
  }

  #[test]
  fn example_may_be_missing_or_null() {
    let content = json!([
      { "id": "a", "index": 1, "word": { "hanzi": "一", "pinyin": "yī" }, "meaning": "one" },
      { "id": "b", "index": 2, "word": { "hanzi": "二", "pinyin": "èr" }, "meaning": "two", "example": null }
    ])
    .to_string();

    let entries: Vec<_> =
      parse_level(1, &content).unwrap().into_iter().map(RawRecord::into_entry).collect();
    assert!(entries.iter().all(|e| e.example.is_none()));
  }

  #[test]
  fn missing_pinyin_fails_the_level() {
    let content = json!([{ "id": "a", "index": 1, "word": { "hanzi": "一" }, "meaning": "one" }])
      .to_string();

    let err = parse_level(3, &content).unwrap_err();
    assert!(matches!(err, DataLoadError::Malformed { level: 3, .. }));
  }

  #[test]
  fn empty_hanzi_fails_the_level() {
    let content =
      json!([{ "word": { "hanzi": " ", "pinyin": "yī" }, "meaning": "one" }]).to_string();

    let err = parse_level(2, &content).unwrap_err();
    match err {
      DataLoadError::Malformed { level, reason } => {
        assert_eq!(level, 2);
        assert!(reason.contains("#0"));
      }
      other => panic!("expected Malformed, got {other:?}"),
    }
  }

  #[test]
  fn non_array_fails_the_level() {
    let err = parse_level(1, r#"{"word": "x"}"#).unwrap_err();
    assert!(matches!(err, DataLoadError::Malformed { level: 1, .. }));
  }
}
