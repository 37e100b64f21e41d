//! Fuzzy spelling suggestions.
//!
//! The pieces build on each other: [`levenshtein`] provides the distance
//! metrics, [`generator`] indexes a dictionary and finds candidates within an
//! edit bound, [`rerank`] reorders a candidate list by Damerau-Levenshtein
//! cost, and [`suggest`] ties them together behind a single entry point.

pub mod cache;
pub mod dictionary;
pub mod generator;
pub mod levenshtein;
pub mod normalize;
pub mod rerank;
pub mod suggest;

// Re-export commonly used types
pub use dictionary::{DictionaryEntry, load_word_list, parse_word_list};
pub use generator::{Candidate, CandidateGenerator, GeneratorConfig};
pub use levenshtein::{bounded_levenshtein, damerau_levenshtein, levenshtein_distance};
pub use rerank::{RerankOptions, rerank_candidates_by_damerau};
pub use suggest::{
    CandidateSource, IndexedSource, RerankMode, SourceQuery, SourceSuggestion, SuggestOptions,
    suggest_with_optional_rerank,
};
