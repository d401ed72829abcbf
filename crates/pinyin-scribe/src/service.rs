// crates/pinyin-scribe/src/service.rs

//! ScribeService: the integration facade of the pinyin-scribe crate.
//!
//! - Reference data (ReferenceDataStore), shared by both searches
//! - Free-text lookup (DictionarySearch)
//! - Character suggestions (SyllableCandidateSearch)
//! - Tone placement (apply_tone)
//!
//! A transport layer only needs this struct. Queries are trimmed here, and a
//! blank query answers with an empty response without touching the store.

use std::sync::Arc;

use tracing::info;

use crate::config::ScribeConfig;
use crate::dictionary::{LevelSource, ReferenceDataStore};
use crate::errors::ScribeResult;
use crate::models::{LookupResponse, SuggestResponse};
use crate::normalizer::normalize_romanization;
use crate::searcher::{DictionarySearch, SyllableCandidateSearch, is_shorthand_query};
use crate::tone;

/// Integration facade of the pinyin-scribe crate.
#[derive(Debug, Clone)]
pub struct ScribeService {
  /// Shared reference data
  store: Arc<ReferenceDataStore>,

  /// Free-text lookup
  dictionary_search: DictionarySearch,

  /// Pinyin to character suggestions
  candidate_search: SyllableCandidateSearch,
}

impl ScribeService {
  /// Initialization from configuration.
  ///
  /// Validates `config` and wires both searches to one store reading the
  /// configured level files. The files themselves are read on first use.
  ///
  /// # Errors
  /// - Invalid configuration
  /// - No data directory could be determined
  pub fn init(config: &ScribeConfig) -> ScribeResult<Self> {
    config.validate()?;

    let source = config.level_source()?;
    info!(
      data_dir = %source.data_dir().display(),
      levels = config.data.levels,
      candidate_limit = config.candidate_limit(),
      "Initializing ScribeService"
    );

    Ok(Self::with_source(source, config.candidate_limit()))
  }

  /// Builds a service over any level source.
  pub fn with_source<S: LevelSource + 'static>(source: S, candidate_limit: usize) -> Self {
    Self::with_store(Arc::new(ReferenceDataStore::new(source)), candidate_limit)
  }

  /// Builds a service over an existing store.
  pub fn with_store(store: Arc<ReferenceDataStore>, candidate_limit: usize) -> Self {
    Self {
      dictionary_search: DictionarySearch::new(Arc::clone(&store)),
      candidate_search: SyllableCandidateSearch::with_limit(Arc::clone(&store), candidate_limit),
      store,
    }
  }

  /// Free-text dictionary lookup.
  ///
  /// # Errors
  /// Reference data could not be loaded.
  pub fn lookup(&self, query: &str) -> ScribeResult<LookupResponse> {
    let query = query.trim();
    if query.is_empty() {
      return Ok(LookupResponse::empty());
    }

    let results = self.dictionary_search.search(query)?;
    Ok(LookupResponse::new(results))
  }

  /// Character suggestions for typed pinyin.
  ///
  /// # Errors
  /// Reference data could not be loaded.
  pub fn suggest(&self, query: &str) -> ScribeResult<SuggestResponse> {
    let query = query.trim();
    if query.is_empty() {
      return Ok(SuggestResponse::empty());
    }

    let results = self.candidate_search.search(query)?;
    let is_shorthand = is_shorthand_query(&normalize_romanization(query));
    Ok(SuggestResponse::new(results, is_shorthand))
  }

  /// Places a tone mark on `text`; see [`tone::apply_tone`].
  pub fn apply_tone(&self, text: &str, tone: u8) -> String {
    tone::apply_tone(text, tone)
  }

  /// Returns the shared reference data store.
  pub fn store(&self) -> &Arc<ReferenceDataStore> {
    &self.store
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::DataConfig;
  use crate::dictionary::MemoryLevelSource;
  use crate::errors::{ConfigError, ScribeError};
  use serde_json::json;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  fn sample_service() -> ScribeService {
    let level = json!([
      { "word": { "hanzi": "你好", "pinyin": "nǐ hǎo" }, "meaning": "hello" },
      { "word": { "hanzi": "你", "pinyin": "nǐ" }, "meaning": "you" },
      { "word": { "hanzi": "好", "pinyin": "hǎo" }, "meaning": "good; well" }
    ]);
    ScribeService::with_source(MemoryLevelSource::new([level.to_string()]), 10)
  }

  // ─── lookup ───────────────────────────────────────────────────────────

  #[test]
  fn lookup_blank_query_skips_store() {
    let service = sample_service();

    let response = service.lookup("   ").unwrap();
    assert_eq!(response, LookupResponse::empty());
    assert!(!service.store().is_loaded());
  }

  #[test]
  fn lookup_trims_and_searches() {
    let service = sample_service();

    let response = service.lookup(" 你好 ").unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].word, "你好");
    assert!(service.store().is_loaded());
  }

  // ─── suggest ──────────────────────────────────────────────────────────

  #[test]
  fn suggest_reports_shorthand_classification() {
    let service = sample_service();

    let response = service.suggest("nh").unwrap();
    assert!(response.is_shorthand);
    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].entry.word, "你好");

    let response = service.suggest("ni").unwrap();
    assert!(response.is_shorthand);
    assert_eq!(response.count, 2);

    let response = service.suggest("n").unwrap();
    assert!(!response.is_shorthand);
  }

  #[test]
  fn suggest_blank_query_is_empty() {
    let service = sample_service();
    assert_eq!(service.suggest("").unwrap(), SuggestResponse::empty());
  }

  #[test]
  fn load_failure_is_reported_as_error() {
    let service = ScribeService::with_source(MemoryLevelSource::new(["{ broken"]), 10);

    let err = service.lookup("好").unwrap_err();
    assert!(matches!(err, ScribeError::DataLoad(_)));
  }

  // ─── init / apply_tone ────────────────────────────────────────────────

  #[test]
  fn init_rejects_invalid_config() {
    let config = ScribeConfig {
      data: DataConfig {
        levels: 0,
        ..DataConfig::default()
      },
      ..ScribeConfig::default()
    };

    let err = ScribeService::init(&config).unwrap_err();
    assert!(matches!(err, ScribeError::Config(ConfigError::NoLevels)));
  }

  #[test]
  fn apply_tone_passes_through() {
    let service = sample_service();
    assert_eq!(service.apply_tone("hao", 3), "hǎo");
    assert_eq!(service.apply_tone("hao", 0), "hao");
  }
}
