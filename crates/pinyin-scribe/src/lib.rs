//! pinyin-scribe: pinyin tone placement and HSK dictionary search
//!
//! Turns typed pinyin into tone-marked pinyin and Chinese character
//! candidates, and looks words up across the merged HSK reference data.

/// Configuration module - ScribeConfig and its TOML sections
pub mod config;

/// Cursor module - pure text edits around an editor cursor
pub mod cursor;

/// Dictionary module - level sources and the build-once reference store
pub mod dictionary;

/// Error module - ScribeError, ScribeResult and per-concern errors
pub mod errors;

/// Data model module - DictionaryEntry, Candidate and response envelopes
pub mod models;

/// Normalization of free text and pinyin for comparison
pub mod normalizer;

/// Search module - free-text lookup and pinyin candidate search
pub mod searcher;

/// Service module - the ScribeService facade
pub mod service;

/// Tone module - tone mark table and placement
pub mod tone;

/// Re-exports
pub use config::ScribeConfig;
pub use errors::{ScribeError, ScribeResult};
pub use models::{Candidate, DictionaryEntry, LookupResponse, MatchType, SuggestResponse};
pub use service::ScribeService;
pub use tone::{ToneTable, apply_tone};
