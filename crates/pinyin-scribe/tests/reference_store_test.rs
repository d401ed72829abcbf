//! Reference store integration tests
//! Build-once loading under concurrent callers

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use serde_json::json;

use pinyin_scribe::dictionary::{LevelSource, ReferenceDataStore};
use pinyin_scribe::errors::DataLoadError;
use pinyin_scribe::searcher::{DictionarySearch, SyllableCandidateSearch};

/// In-memory level source that counts reads per level.
struct CountingSource {
  levels: Vec<String>,
  reads: Arc<Vec<AtomicUsize>>,
}

impl CountingSource {
  fn new(levels: Vec<String>) -> (Self, Arc<Vec<AtomicUsize>>) {
    let reads: Arc<Vec<AtomicUsize>> = Arc::new(levels.iter().map(|_| AtomicUsize::new(0)).collect());
    let source = Self {
      levels,
      reads: Arc::clone(&reads),
    };
    (source, reads)
  }
}

impl LevelSource for CountingSource {
  fn level_count(&self) -> u8 {
    self.levels.len() as u8
  }

  fn read_level(&self, level: u8) -> Result<String, DataLoadError> {
    let idx = usize::from(level) - 1;
    self.reads[idx].fetch_add(1, Ordering::SeqCst);
    // widen the window in which other callers arrive mid-build
    thread::sleep(Duration::from_millis(5));
    Ok(self.levels[idx].clone())
  }
}

fn sample_levels() -> Vec<String> {
  vec![
    json!([
      { "word": { "hanzi": "你", "pinyin": "nǐ" }, "meaning": "you" },
      { "word": { "hanzi": "好", "pinyin": "hǎo" }, "meaning": "good" }
    ])
    .to_string(),
    json!([{ "word": { "hanzi": "你好", "pinyin": "nǐ hǎo" }, "meaning": "hello" }]).to_string(),
    json!([{ "word": { "hanzi": "好", "pinyin": "hǎo" }, "meaning": "good; well" }]).to_string(),
  ]
}

#[test]
fn concurrent_loads_read_each_level_once() {
  let (source, reads) = CountingSource::new(sample_levels());
  let store = ReferenceDataStore::new(source);

  let dictionaries: Vec<_> = thread::scope(|scope| {
    let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| store.load().unwrap())).collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  for count in reads.iter() {
    assert_eq!(count.load(Ordering::SeqCst), 1);
  }

  let first = &dictionaries[0];
  assert_eq!(first.len(), 3);
  for dictionary in &dictionaries[1..] {
    assert!(Arc::ptr_eq(first, dictionary));
  }
}

#[test]
fn both_searches_share_one_load() {
  let (source, reads) = CountingSource::new(sample_levels());
  let store = Arc::new(ReferenceDataStore::new(source));

  let lookup = DictionarySearch::new(Arc::clone(&store));
  let suggest = SyllableCandidateSearch::new(Arc::clone(&store));

  thread::scope(|scope| {
    scope.spawn(|| {
      let results = lookup.search("好").unwrap();
      assert_eq!(results[0].meanings, vec!["good; well".to_string()]);
    });
    scope.spawn(|| {
      let results = suggest.search("ni").unwrap();
      assert_eq!(results[0].entry.word, "你");
    });
  });

  for count in reads.iter() {
    assert_eq!(count.load(Ordering::SeqCst), 1);
  }
}

#[test]
fn failed_build_is_retried() {
  struct FlakySource {
    attempts: AtomicUsize,
  }

  impl LevelSource for FlakySource {
    fn level_count(&self) -> u8 {
      1
    }

    fn read_level(&self, _level: u8) -> Result<String, DataLoadError> {
      if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
        return Ok("[".to_string());
      }
      Ok(json!([{ "word": { "hanzi": "一", "pinyin": "yī" }, "meaning": "one" }]).to_string())
    }
  }

  let store = ReferenceDataStore::new(FlakySource {
    attempts: AtomicUsize::new(0),
  });

  assert!(matches!(store.load(), Err(DataLoadError::Malformed { level: 1, .. })));
  assert!(!store.is_loaded());

  let dictionary = store.load().unwrap();
  assert_eq!(dictionary.len(), 1);
  assert!(store.is_loaded());
}
