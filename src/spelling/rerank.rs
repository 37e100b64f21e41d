//! Damerau-Levenshtein reranking of an existing candidate list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::damerau_levenshtein;
use crate::spelling::normalize::{char_len, normalize_token};

/// Options for [`rerank_candidates_by_damerau`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankOptions {
    /// Drop candidates whose cost exceeds this; `None` keeps every cost.
    pub max_distance: Option<usize>,
    /// Keep at most this many candidates; `None` keeps all.
    pub top_k: Option<usize>,
}

struct Scored<'a> {
    word: &'a str,
    cost: Option<usize>,
    same_length: bool,
    length_diff: usize,
}

/// Reorder `candidates` by Damerau-Levenshtein cost against `input`.
///
/// Both sides are compared NFC-normalized and lowercased. Among equal costs,
/// candidates as long as the input come first (a transposition or
/// substitution beats an insertion or deletion), then smaller length
/// difference, then lexicographic order. A candidate without a cost (over
/// the bound) sorts last and is filtered out. The result is always a subset
/// of `candidates` and depends only on the arguments.
pub fn rerank_candidates_by_damerau<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    options: &RerankOptions,
) -> Vec<String> {
    let bound = options.max_distance.unwrap_or(usize::MAX);
    let normalized_input = normalize_token(input, true);
    let input_len = char_len(&normalized_input);

    let mut scored: Vec<Scored<'_>> = candidates
        .iter()
        .map(|candidate| {
            let word = candidate.as_ref();
            let normalized = normalize_token(word, true);
            let len = char_len(&normalized);
            Scored {
                word,
                cost: damerau_levenshtein(&normalized_input, &normalized, bound),
                same_length: len == input_len,
                length_diff: len.abs_diff(input_len),
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        compare_costs(a.cost, b.cost)
            .then_with(|| b.same_length.cmp(&a.same_length))
            .then_with(|| a.length_diff.cmp(&b.length_diff))
            .then_with(|| a.word.cmp(b.word))
    });

    scored
        .into_iter()
        .filter(|s| s.cost.is_some_and(|cost| cost <= bound))
        .take(options.top_k.unwrap_or(usize::MAX))
        .map(|s| s.word.to_string())
        .collect()
}

/// Missing costs are infinite and compare greater than any finite cost.
fn compare_costs(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
