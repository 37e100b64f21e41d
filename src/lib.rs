//! # Lexfix
//!
//! Fuzzy spelling suggestions for Rust.
//!
//! ## Features
//!
//! - SymSpell-style delete index with an LRU result cache
//! - Banded Levenshtein and unrestricted Damerau-Levenshtein distances
//! - Unicode-aware matching (NFC, case folding, accent folding)
//! - Identifier-aware lookups (`snake_case`, `camelCase`, `kebab-case`)
//! - Optional Damerau reranking of candidate lists
//!
//! ```
//! use lexfix::spelling::{CandidateSource, DictionaryEntry, SuggestOptions};
//! use lexfix::spelling::suggest_with_optional_rerank;
//!
//! let words: Vec<DictionaryEntry> = ["hello", "help", "world"]
//!     .into_iter()
//!     .map(DictionaryEntry::from)
//!     .collect();
//! let suggestions = suggest_with_optional_rerank(
//!     "wrld",
//!     CandidateSource::WordList(&words),
//!     &SuggestOptions::default(),
//! );
//! assert_eq!(suggestions[0], "world");
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{LexfixError, Result};
    pub use crate::spelling::{
        Candidate, CandidateGenerator, CandidateSource, DictionaryEntry, GeneratorConfig,
        IndexedSource, RerankMode, RerankOptions, SuggestOptions, suggest_with_optional_rerank,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
