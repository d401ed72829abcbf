//! searcher module

pub mod candidate_search;
pub mod dictionary_search;

/// Re-exports
pub use candidate_search::{DEFAULT_CANDIDATE_LIMIT, SyllableCandidateSearch, is_shorthand_query};
pub use dictionary_search::{DictionarySearch, FreeTextQuery, SCORING_RULES, ScoringRule};
