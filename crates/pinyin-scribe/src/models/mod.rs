//! Data model module

pub mod model_definition;
pub mod response;

pub use model_definition::{Candidate, DictionaryEntry, MatchType};
pub use response::{LookupResponse, SuggestResponse};
