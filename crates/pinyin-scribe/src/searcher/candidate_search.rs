//! Pinyin to character candidate search
//!
//! Every entry falls into at most one tier, checked in order:
//!
//! 1. **exact**: the whole pinyin, or one of its syllables, equals the query
//! 2. **partial**: the whole pinyin, or one of its syllables, starts with the query
//! 3. **shorthand**: the syllable initials start with the query letters
//!    (only for queries of two or more letters, e.g. `nh` for `nǐ hǎo`)
//!
//! Each tier is sorted by syllable count (fewest first) and the tiers are
//! concatenated exact, partial, shorthand before truncating to the limit.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::dictionary::{Dictionary, ReferenceDataStore};
use crate::errors::DataLoadError;
use crate::models::{Candidate, DictionaryEntry, MatchType};
use crate::normalizer::normalize_romanization;

/// Maximum number of candidates returned by default
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// Whether a normalized query should be read as syllable initials
///
/// Two or more characters, all of them ASCII lowercase letters.
pub fn is_shorthand_query(normalized_query: &str) -> bool {
  normalized_query.chars().count() >= 2 && normalized_query.chars().all(|c| c.is_ascii_lowercase())
}

/// Tier of `entry` for `query`, with its syllable count
///
/// `query` must already be normalized with [`normalize_romanization`].
fn classify(entry: &DictionaryEntry, query: &str, shorthand: bool) -> Option<(MatchType, usize)> {
  let pinyin = normalize_romanization(&entry.romanization);
  let syllables: Vec<&str> = pinyin.split_whitespace().collect();
  let count = syllables.len();

  if pinyin == query || syllables.contains(&query) {
    return Some((MatchType::Exact, count));
  }

  if pinyin.starts_with(query) || syllables.iter().any(|s| s.starts_with(query)) {
    return Some((MatchType::Partial, count));
  }

  if shorthand {
    let initials: String = syllables.iter().filter_map(|s| s.chars().next()).collect();
    if initials.starts_with(query) {
      return Some((MatchType::Shorthand, count));
    }
  }

  None
}

/// Ranks candidates for `raw_query`, keeping at most `limit`
pub fn rank_candidates(dictionary: &Dictionary, raw_query: &str, limit: usize) -> Vec<Candidate> {
  let query = normalize_romanization(raw_query);
  if query.is_empty() {
    return Vec::new();
  }

  let shorthand = is_shorthand_query(&query);
  let mut exact = Vec::new();
  let mut partial = Vec::new();
  let mut initials = Vec::new();

  for entry in dictionary {
    let Some((match_type, count)) = classify(entry, &query, shorthand) else {
      continue;
    };

    let bucket = match match_type {
      MatchType::Exact => &mut exact,
      MatchType::Partial => &mut partial,
      MatchType::Shorthand => &mut initials,
    };
    bucket.push(Candidate::new(entry.clone(), match_type, count));
  }

  for bucket in [&mut exact, &mut partial, &mut initials] {
    bucket.sort_by_key(|c| c.syllable_count);
  }

  exact.into_iter().chain(partial).chain(initials).take(limit).collect()
}

/// Candidate search over the shared reference dictionary
#[derive(Debug, Clone)]
pub struct SyllableCandidateSearch {
  store: Arc<ReferenceDataStore>,
  limit: usize,
}

impl SyllableCandidateSearch {
  /// Creates a search over `store` returning up to [`DEFAULT_CANDIDATE_LIMIT`] items
  pub fn new(store: Arc<ReferenceDataStore>) -> Self {
    Self::with_limit(store, DEFAULT_CANDIDATE_LIMIT)
  }

  /// Creates a search with a custom result limit
  pub fn with_limit(store: Arc<ReferenceDataStore>, limit: usize) -> Self {
    Self { store, limit }
  }

  /// Maximum number of candidates returned
  pub fn limit(&self) -> usize {
    self.limit
  }

  /// Searches candidates for `raw_query`
  ///
  /// # Errors
  /// Only a failure to build the reference dictionary is reported; a query
  /// that matches nothing yields an empty list.
  pub fn search(&self, raw_query: &str) -> Result<Vec<Candidate>, DataLoadError> {
    let dictionary = self.store.load()?;

    let started = Instant::now();
    let results = rank_candidates(&dictionary, raw_query, self.limit);
    debug!(
      query = %raw_query,
      hits = results.len(),
      elapsed_us = started.elapsed().as_micros() as u64,
      "Candidate search completed"
    );

    Ok(results)
  }
}
