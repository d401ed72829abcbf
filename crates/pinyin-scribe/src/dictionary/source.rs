//! Level file sources
//!
//! A [`LevelSource`] hands the raw contents of each proficiency level to the
//! [`ReferenceDataStore`](super::ReferenceDataStore). The store decides when
//! to read; sources only know where the bytes come from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::DataLoadError;

/// Provider of leveled reference data files
pub trait LevelSource: Send + Sync {
  /// Number of levels; levels are numbered `1..=level_count()`
  fn level_count(&self) -> u8;

  /// Returns the raw JSON text of `level`
  fn read_level(&self, level: u8) -> Result<String, DataLoadError>;
}

/// Reads `<data_dir>/<file_prefix><level>.json` from disk
#[derive(Debug, Clone)]
pub struct FsLevelSource {
  /// Directory holding the level files
  data_dir: PathBuf,

  /// File name prefix, e.g. `hsk` for `hsk1.json`
  file_prefix: String,

  /// Number of levels
  levels: u8,
}

impl FsLevelSource {
  /// Default file name prefix
  pub const DEFAULT_PREFIX: &'static str = "hsk";

  /// Default number of levels (HSK 1-6)
  pub const DEFAULT_LEVELS: u8 = 6;

  /// Source over the six `hsk{n}.json` files in `data_dir`
  pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
    Self::with_layout(data_dir, Self::DEFAULT_PREFIX, Self::DEFAULT_LEVELS)
  }

  /// Source with a custom file prefix and level count
  pub fn with_layout<P: AsRef<Path>>(
    data_dir: P,
    file_prefix: impl Into<String>,
    levels: u8,
  ) -> Self {
    Self {
      data_dir: data_dir.as_ref().to_path_buf(),
      file_prefix: file_prefix.into(),
      levels,
    }
  }

  /// Returns the directory holding the level files
  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  /// Returns the path of the file for `level`
  pub fn level_path(&self, level: u8) -> PathBuf {
    self.data_dir.join(format!("{}{}.json", self.file_prefix, level))
  }
}

impl LevelSource for FsLevelSource {
  fn level_count(&self) -> u8 {
    self.levels
  }

  fn read_level(&self, level: u8) -> Result<String, DataLoadError> {
    let path = self.level_path(level);

    fs::read_to_string(&path).map_err(|e| match e.kind() {
      io::ErrorKind::NotFound => DataLoadError::NotFound { level, path },
      _ => DataLoadError::Io {
        level,
        path,
        source: Arc::new(e),
      },
    })
  }
}

/// Level contents held in memory
///
/// Useful for data compiled into the binary with `include_str!`, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelSource {
  levels: Vec<String>,
}

impl MemoryLevelSource {
  /// Source whose level `n` is `levels[n - 1]`
  pub fn new<I, S>(levels: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      levels: levels.into_iter().map(Into::into).collect(),
    }
  }
}

impl LevelSource for MemoryLevelSource {
  fn level_count(&self) -> u8 {
    u8::try_from(self.levels.len()).unwrap_or(u8::MAX)
  }

  fn read_level(&self, level: u8) -> Result<String, DataLoadError> {
    usize::from(level)
      .checked_sub(1)
      .and_then(|idx| self.levels.get(idx))
      .cloned()
      .ok_or_else(|| DataLoadError::NotFound {
        level,
        path: PathBuf::from(format!("<memory level {level}>")),
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn level_path_uses_prefix_and_number() {
    let source = FsLevelSource::new("/data");
    assert_eq!(source.level_path(3), PathBuf::from("/data/hsk3.json"));
    assert_eq!(source.level_count(), 6);
  }

  #[test]
  fn fs_source_reads_existing_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lvl1.json"), "[]").unwrap();

    let source = FsLevelSource::with_layout(dir.path(), "lvl", 1);
    assert_eq!(source.read_level(1).unwrap(), "[]");
  }

  #[test]
  fn fs_source_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let source = FsLevelSource::new(dir.path());

    match source.read_level(2).unwrap_err() {
      DataLoadError::NotFound { level, path } => {
        assert_eq!(level, 2);
        assert!(path.ends_with("hsk2.json"));
      }
      other => panic!("expected NotFound, got {other:?}"),
    }
  }

  #[test]
  fn memory_source_is_one_based() {
    let source = MemoryLevelSource::new(["first", "second"]);

    assert_eq!(source.level_count(), 2);
    assert_eq!(source.read_level(1).unwrap(), "first");
    assert_eq!(source.read_level(2).unwrap(), "second");
    assert!(source.read_level(0).is_err());
    assert!(source.read_level(3).is_err());
  }
}
