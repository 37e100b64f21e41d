//! Suggestion orchestration: candidate source, optional rerank, truncation.

use ahash::AHashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::dictionary::DictionaryEntry;
use crate::spelling::generator::{CandidateGenerator, GeneratorConfig};
use crate::spelling::normalize::normalize_token;
use crate::spelling::rerank::{RerankOptions, rerank_candidates_by_damerau};

/// Reranking strategy applied after candidate generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RerankMode {
    /// Reorder by Damerau-Levenshtein cost.
    Damerau,
}

/// Options for [`suggest_with_optional_rerank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestOptions {
    /// Number of suggestions to return when not reranking.
    pub num_suggestions: usize,
    /// Edit distance bound for lookup and rerank; `None` lets the generator
    /// pick one from the word length and disables the rerank bound.
    pub max_distance: Option<usize>,
    pub rerank: Option<RerankMode>,
    /// Size of the reranked result; defaults to `num_suggestions`.
    pub rerank_top_k: Option<usize>,
    pub use_lowercase: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        SuggestOptions {
            num_suggestions: 10,
            max_distance: None,
            rerank: None,
            rerank_top_k: None,
            use_lowercase: true,
        }
    }
}

/// Query parameters handed to an [`IndexedSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceQuery {
    pub num_suggestions: usize,
    /// Edit distance bound requested by the caller; `None` leaves the choice
    /// to the source.
    pub max_distance: Option<usize>,
    pub ignore_case: bool,
}

/// One result of an indexed source: a bare term or an object carrying a `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceSuggestion {
    Term(String),
    Entry { word: String },
}

impl SourceSuggestion {
    pub fn into_word(self) -> String {
        match self {
            SourceSuggestion::Term(word) | SourceSuggestion::Entry { word } => word,
        }
    }
}

/// A prebuilt fuzzy index that produces its own suggestions.
pub trait IndexedSource {
    fn suggest(&self, word: &str, query: &SourceQuery) -> Result<Vec<SourceSuggestion>>;
}

impl IndexedSource for CandidateGenerator {
    fn suggest(&self, word: &str, query: &SourceQuery) -> Result<Vec<SourceSuggestion>> {
        Ok(self
            .lookup(word, query.max_distance)
            .into_iter()
            .take(query.num_suggestions)
            .map(|candidate| SourceSuggestion::Term(candidate.term))
            .collect())
    }
}

/// Where candidates come from.
#[derive(Clone, Copy)]
pub enum CandidateSource<'a> {
    /// An indexed source, optionally backed by a word list used when the
    /// index fails or finds nothing.
    Indexed {
        index: &'a dyn IndexedSource,
        fallback: Option<&'a [DictionaryEntry]>,
    },
    /// A raw word list, indexed on the fly.
    WordList(&'a [DictionaryEntry]),
}

impl<'a> CandidateSource<'a> {
    pub fn indexed(index: &'a dyn IndexedSource) -> Self {
        CandidateSource::Indexed {
            index,
            fallback: None,
        }
    }

    pub fn indexed_with_fallback(
        index: &'a dyn IndexedSource,
        fallback: &'a [DictionaryEntry],
    ) -> Self {
        CandidateSource::Indexed {
            index,
            fallback: Some(fallback),
        }
    }

    fn word_list(&self) -> Option<&'a [DictionaryEntry]> {
        match *self {
            CandidateSource::Indexed { fallback, .. } => fallback,
            CandidateSource::WordList(entries) => Some(entries),
        }
    }
}

/// Produce ranked suggestions for `word`.
///
/// Candidates come from the indexed source when there is one; its errors are
/// logged and treated as "no candidates". Without candidates, an ephemeral
/// [`CandidateGenerator`] is built over the word list, and every list word it
/// did not surface is appended so short or heavily transposed inputs still
/// have the full dictionary to rerank. The list is deduplicated, cut to a
/// pre-rerank window of `max(num_suggestions, rerank_top_k or 2 *
/// num_suggestions)`, then either reranked or truncated to `num_suggestions`.
pub fn suggest_with_optional_rerank(
    word: &str,
    source: CandidateSource<'_>,
    options: &SuggestOptions,
) -> Vec<String> {
    let num_suggestions = options.num_suggestions;
    let mut candidates: Vec<String> = Vec::new();

    if let CandidateSource::Indexed { index, .. } = source {
        let query = SourceQuery {
            num_suggestions,
            max_distance: options.max_distance,
            ignore_case: options.use_lowercase,
        };
        match index.suggest(word, &query) {
            Ok(found) => {
                candidates = found.into_iter().map(SourceSuggestion::into_word).collect();
            }
            Err(e) => warn!("indexed source failed for {word:?}, falling back: {e}"),
        }
    }

    if candidates.is_empty()
        && let Some(entries) = source.word_list()
    {
        candidates = candidates_from_word_list(word, entries, options);
    }

    let mut seen = AHashSet::new();
    candidates.retain(|candidate| seen.insert(candidate.clone()));

    let window = num_suggestions.max(
        options
            .rerank_top_k
            .unwrap_or(num_suggestions.saturating_mul(2)),
    );
    candidates.truncate(window);
    debug!(
        "{} candidates for {word:?} before rerank",
        candidates.len()
    );

    match options.rerank {
        Some(RerankMode::Damerau) => {
            let rerank_options = RerankOptions {
                max_distance: options.max_distance,
                top_k: Some(options.rerank_top_k.unwrap_or(num_suggestions)),
            };
            rerank_candidates_by_damerau(word, &candidates, &rerank_options)
        }
        None => {
            candidates.truncate(num_suggestions);
            candidates
        }
    }
}

fn candidates_from_word_list(
    word: &str,
    entries: &[DictionaryEntry],
    options: &SuggestOptions,
) -> Vec<String> {
    let config = GeneratorConfig {
        max_edit: options.max_distance.unwrap_or(2),
        max_suggestions: options.num_suggestions,
        use_lowercase: options.use_lowercase,
        ..Default::default()
    };
    let generator = CandidateGenerator::from_entries(config, entries);

    let mut candidates: Vec<String> = generator
        .lookup(word, options.max_distance)
        .into_iter()
        .map(|candidate| candidate.term)
        .collect();

    // Words the index missed still deserve a chance in the rerank.
    candidates.extend(
        entries
            .iter()
            .map(|entry| normalize_token(entry.word(), false))
            .filter(|w| !w.is_empty()),
    );
    candidates
}
