//! Reference Data Store
//!
//! Builds the merged HSK dictionary from the leveled source files and keeps it
//! for the lifetime of the store.
//! The first successful `load()` reads every level in ascending order; later
//! calls return the same shared `Arc<Dictionary>`.
//! A failed build caches nothing, so the next `load()` starts over.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use super::raw_record::{RawRecord, parse_level};
use super::source::LevelSource;
use crate::errors::DataLoadError;
use crate::models::DictionaryEntry;

/// Merged dictionary keyed by `word`
///
/// Iteration follows the order in which each word first appeared. A word
/// that appears again in a later level replaces the earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
  /// Entries in first-seen order
  entries: Vec<DictionaryEntry>,

  /// word -> position in `entries`
  positions: HashMap<String, usize>,
}

impl Dictionary {
  /// Empty dictionary
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a dictionary by inserting `entries` in order (last write wins)
  pub fn from_entries<I: IntoIterator<Item = DictionaryEntry>>(entries: I) -> Self {
    let mut dictionary = Self::new();
    for entry in entries {
      dictionary.insert(entry);
    }
    dictionary
  }

  /// Inserts `entry`, overwriting any entry with the same word
  pub fn insert(&mut self, entry: DictionaryEntry) {
    match self.positions.get(&entry.word) {
      Some(&pos) => self.entries[pos] = entry,
      None => {
        self.positions.insert(entry.word.clone(), self.entries.len());
        self.entries.push(entry);
      }
    }
  }

  /// Looks up an entry by its exact word
  pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
    self.positions.get(word).map(|&pos| &self.entries[pos])
  }

  /// Iterates entries in first-seen order
  pub fn iter(&self) -> std::slice::Iter<'_, DictionaryEntry> {
    self.entries.iter()
  }

  /// Number of distinct words
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the dictionary holds no words
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<'a> IntoIterator for &'a Dictionary {
  type Item = &'a DictionaryEntry;
  type IntoIter = std::slice::Iter<'a, DictionaryEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Build-once cache over a [`LevelSource`]
pub struct ReferenceDataStore {
  /// Where the level files come from
  source: Box<dyn LevelSource>,

  /// Merged dictionary, set only after a complete successful build
  dictionary: OnceCell<Arc<Dictionary>>,
}

impl ReferenceDataStore {
  /// Creates an empty store; nothing is read until the first `load()`
  pub fn new<S: LevelSource + 'static>(source: S) -> Self {
    Self {
      source: Box::new(source),
      dictionary: OnceCell::new(),
    }
  }

  /// Load the merged dictionary
  /// - Reads and merges every level on the first call
  /// - Returns a clone of the shared `Arc<Dictionary>` afterwards
  /// - Concurrent first callers block until the single build finishes
  /// - On error nothing is cached and the error is returned to the caller
  pub fn load(&self) -> Result<Arc<Dictionary>, DataLoadError> {
    self.dictionary.get_or_try_init(|| self.build().map(Arc::new)).cloned()
  }

  /// Whether a successful build has been cached
  pub fn is_loaded(&self) -> bool {
    self.dictionary.get().is_some()
  }

  /// Reads levels `1..=N` in order and merges them
  fn build(&self) -> Result<Dictionary, DataLoadError> {
    let started = Instant::now();
    let level_count = self.source.level_count();
    let mut dictionary = Dictionary::new();

    for level in 1..=level_count {
      let records = self
        .source
        .read_level(level)
        .and_then(|content| parse_level(level, &content))
        .inspect_err(|e| warn!(level, error = %e, "Failed to load reference data level"))?;

      debug!(level, records = records.len(), "Merging reference data level");

      for record in records {
        dictionary.insert(RawRecord::into_entry(record));
      }
    }

    info!(
      levels = level_count,
      entries = dictionary.len(),
      elapsed_ms = started.elapsed().as_millis() as u64,
      "Reference dictionary loaded"
    );

    Ok(dictionary)
  }
}

/// Manual `Debug` implementation for `ReferenceDataStore`
///
/// The boxed source is not required to implement `Debug`, so only meta
/// information is shown.
impl fmt::Debug for ReferenceDataStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ReferenceDataStore")
      .field("levels", &self.source.level_count())
      .field("dictionary_loaded", &self.is_loaded())
      .finish()
  }
}
