//! Free-text dictionary search
//!
//! Scores every entry against the query with an ordered rule table and
//! returns the matching entries best first.
//!
//! # Rules (first match wins)
//!
//! | score | matches when |
//! |------:|--------------|
//! | 1000 | `word` equals the query |
//! | 950 | query is inside `word` or the variant form |
//! | 900 | joined glosses equal the query |
//! | 850 | glosses contain the query as a whole token |
//! | 800 | glosses contain the query |
//! | 750 | pinyin equals the query |
//! | 700 | pinyin contains the query |
//! | 600 | example contains the query |
//!
//! Gloss, pinyin and example rules compare both the lowercased raw text and
//! the [`normalize_general`] form. Ties are broken by the shorter `word`.

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dictionary::{Dictionary, ReferenceDataStore};
use crate::errors::DataLoadError;
use crate::models::DictionaryEntry;
use crate::normalizer::normalize_general;

/// Separators used to cut glosses into whole tokens
static GLOSS_SEPARATORS: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[\s,.;:()!]+").expect("gloss separator pattern is valid"));

/// Query in the three forms the rules compare against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTextQuery {
  /// Query as typed; compared case-sensitively against `word` and variant
  pub raw: String,
  /// Lowercased and trimmed
  pub lower: String,
  /// `normalize_general` of the lowercased query
  pub normalized: String,
}

impl FreeTextQuery {
  /// Prepares all comparison forms of `raw`
  pub fn new(raw: &str) -> Self {
    let lower = raw.to_lowercase().trim().to_string();
    let normalized = normalize_general(&lower);
    Self {
      raw: raw.to_string(),
      lower,
      normalized,
    }
  }

  /// True when nothing is left to search for
  pub fn is_empty(&self) -> bool {
    self.normalized.is_empty()
  }
}

/// One row of the scoring table
#[derive(Clone, Copy)]
pub struct ScoringRule {
  /// Score given when the rule matches
  pub score: u32,
  /// Short rule name, used in logs and tests
  pub name: &'static str,
  /// Predicate over the prepared query and an entry
  pub matches: fn(&FreeTextQuery, &DictionaryEntry) -> bool,
}

impl std::fmt::Debug for ScoringRule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ScoringRule").field("score", &self.score).field("name", &self.name).finish()
  }
}

/// Scoring rules in priority order
pub const SCORING_RULES: &[ScoringRule] = &[
  ScoringRule {
    score: 1000,
    name: "word_exact",
    matches: |q, e| e.word == q.raw,
  },
  ScoringRule {
    score: 950,
    name: "word_contains",
    matches: |q, e| {
      e.word.contains(&q.raw) || e.variant.as_deref().is_some_and(|v| v.contains(&q.raw))
    },
  },
  ScoringRule {
    score: 900,
    name: "meaning_exact",
    matches: |q, e| {
      let meanings = GlossView::new(e);
      meanings.lower == q.lower || meanings.normalized == q.normalized
    },
  },
  ScoringRule {
    score: 850,
    name: "meaning_token",
    matches: |q, e| {
      let meanings = GlossView::new(e);
      meanings.contains(q) && meanings.has_token(q)
    },
  },
  ScoringRule {
    score: 800,
    name: "meaning_contains",
    matches: |q, e| GlossView::new(e).contains(q),
  },
  ScoringRule {
    score: 750,
    name: "pinyin_exact",
    matches: |q, e| {
      let pinyin = e.romanization.to_lowercase();
      pinyin == q.lower || normalize_general(&pinyin) == q.normalized
    },
  },
  ScoringRule {
    score: 700,
    name: "pinyin_contains",
    matches: |q, e| contains_either(&e.romanization, q),
  },
  ScoringRule {
    score: 600,
    name: "example_contains",
    matches: |q, e| e.example.as_deref().is_some_and(|example| contains_either(example, q)),
  },
];

/// Lowercased and normalized joined glosses of one entry
struct GlossView {
  lower: String,
  normalized: String,
}

impl GlossView {
  fn new(entry: &DictionaryEntry) -> Self {
    let lower = entry.joined_meanings().to_lowercase();
    let normalized = normalize_general(&lower);
    Self { lower, normalized }
  }

  fn contains(&self, q: &FreeTextQuery) -> bool {
    self.lower.contains(&q.lower) || self.normalized.contains(&q.normalized)
  }

  fn has_token(&self, q: &FreeTextQuery) -> bool {
    GLOSS_SEPARATORS.split(&self.lower).any(|token| token == q.lower)
      || GLOSS_SEPARATORS.split(&self.normalized).any(|token| token == q.normalized)
  }
}

/// Substring test on the lowercased text or its normalized form
fn contains_either(text: &str, q: &FreeTextQuery) -> bool {
  let lower = text.to_lowercase();
  lower.contains(&q.lower) || normalize_general(&lower).contains(&q.normalized)
}

/// Score of the first matching rule, `None` when no rule matches
pub fn score_entry(query: &FreeTextQuery, entry: &DictionaryEntry) -> Option<u32> {
  SCORING_RULES.iter().find(|rule| (rule.matches)(query, entry)).map(|rule| rule.score)
}

/// Ranks `dictionary` against `raw_query`
///
/// - A verbatim `word` hit returns only that entry.
/// - A query that normalizes to nothing returns no entries.
/// - Otherwise matching entries are ordered by score, then by shorter `word`.
pub fn rank(dictionary: &Dictionary, raw_query: &str) -> Vec<DictionaryEntry> {
  if let Some(entry) = dictionary.get(raw_query) {
    return vec![entry.clone()];
  }

  let query = FreeTextQuery::new(raw_query);
  if query.is_empty() {
    return Vec::new();
  }

  let mut scored: Vec<(u32, usize, &DictionaryEntry)> = dictionary
    .iter()
    .filter_map(|entry| {
      score_entry(&query, entry).map(|score| (score, entry.word.chars().count(), entry))
    })
    .collect();

  scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

  scored.into_iter().map(|(_, _, entry)| entry.clone()).collect()
}

/// Free-text search over the shared reference dictionary
#[derive(Debug, Clone)]
pub struct DictionarySearch {
  store: Arc<ReferenceDataStore>,
}

impl DictionarySearch {
  /// Creates a search over `store`
  pub fn new(store: Arc<ReferenceDataStore>) -> Self {
    Self { store }
  }

  /// Searches the dictionary for `raw_query`
  ///
  /// # Errors
  /// Only a failure to build the reference dictionary is reported; a query
  /// that matches nothing yields an empty list.
  pub fn search(&self, raw_query: &str) -> Result<Vec<DictionaryEntry>, DataLoadError> {
    let dictionary = self.store.load()?;

    let started = Instant::now();
    let results = rank(&dictionary, raw_query);
    debug!(
      query = %raw_query,
      hits = results.len(),
      elapsed_us = started.elapsed().as_micros() as u64,
      "Dictionary search completed"
    );

    Ok(results)
  }
}
