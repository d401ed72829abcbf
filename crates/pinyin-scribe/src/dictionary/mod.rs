//! dictionary module

pub mod raw_record;
pub mod reference_store;
pub mod source;

/// Re-exports
pub use raw_record::{RawExample, RawRecord, RawWord};
pub use reference_store::{Dictionary, ReferenceDataStore};
pub use source::{FsLevelSource, LevelSource, MemoryLevelSource};
