//! Delete-based fuzzy candidate generation (SymSpell style).
//!
//! Every dictionary word is registered under its normalized key and under
//! every string reachable by deleting up to `max_edit` characters from it.
//! A query enumerates its own deletions and intersects them with that index,
//! so candidates are found without comparing against the whole dictionary;
//! each candidate is then verified with an exact bounded edit distance.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use log::{debug, trace, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{LexfixError, Result};
use crate::spelling::cache::LruCache;
use crate::spelling::dictionary::DictionaryEntry;
use crate::spelling::levenshtein::bounded_levenshtein;
use crate::spelling::normalize::{
    char_len, fold_diacritics, has_diacritics, normalize_token, split_identifier,
};

/// Configuration for the candidate generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Deepest deletion level indexed per word, and the cap for the
    /// length-based distance heuristic.
    pub max_edit: usize,
    /// Maximum number of candidates returned by a lookup.
    pub max_suggestions: usize,
    /// Whether keys and queries are lowercased before matching.
    pub use_lowercase: bool,
    /// Soft cap on distinct deletions explored per word or query.
    pub max_queue_size: usize,
    /// Keys up to this many characters are looked up with distance 1.
    pub short_word_threshold: usize,
    /// Number of cached lookup results; zero disables the cache.
    pub cache_capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_edit: 2,
            max_suggestions: 8,
            use_lowercase: true,
            max_queue_size: 100_000,
            short_word_threshold: 4,
            cache_capacity: 1000,
        }
    }
}

/// A verified correction candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The dictionary word in the form it was inserted (NFC, original case).
    pub term: String,
    /// Edit distance between the normalized query and the normalized term
    /// (their accent-folded forms when found by the fallback scan).
    pub distance: usize,
    /// Cumulative insertion count of the term.
    pub count: u64,
}

/// JSON shape of an exported index.
#[derive(Debug, Serialize, Deserialize)]
struct IndexSnapshot {
    deletes: BTreeMap<String, Vec<String>>,
    freq: BTreeMap<String, u64>,
}

/// Normalized key, requested bound, identifier fragments probed.
type CacheKey = (String, Option<usize>, Vec<String>);

/// In-memory fuzzy index over a dictionary.
///
/// Mutating methods take `&mut self`; [`lookup`](Self::lookup) takes `&self`
/// and only touches the internal result cache, which is mutex-guarded, so a
/// built generator can be shared across threads for concurrent lookups.
#[derive(Debug)]
pub struct CandidateGenerator {
    config: GeneratorConfig,
    /// Delete variant (or key) -> original words that produce it.
    deletes: AHashMap<String, AHashSet<String>>,
    /// Original word -> cumulative count.
    freq: AHashMap<String, u64>,
    cache: Mutex<LruCache<CacheKey, Vec<Candidate>>>,
}

impl CandidateGenerator {
    /// Create an empty generator.
    pub fn new(config: GeneratorConfig) -> Self {
        let cache = Mutex::new(LruCache::new(config.cache_capacity));
        CandidateGenerator {
            config,
            deletes: AHashMap::new(),
            freq: AHashMap::new(),
            cache,
        }
    }

    /// Create a generator and index the given entries.
    pub fn from_entries(config: GeneratorConfig, entries: &[DictionaryEntry]) -> Self {
        let mut generator = Self::new(config);
        generator.build_from_word_list(entries);
        generator
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Add one word, incrementing its count by `count`.
    ///
    /// The word is stored NFC-normalized with its original casing. Blank
    /// words are ignored.
    pub fn add_word(&mut self, word: &str, count: u64) {
        let stored = normalize_token(word, false);
        if stored.is_empty() {
            return;
        }

        let total = self.freq.entry(stored.clone()).or_insert(0);
        *total = total.saturating_add(count);

        let key = normalize_token(&stored, self.config.use_lowercase);
        self.register(&key, &stored);
        for variant in self.generate_deletes(&key) {
            self.register(&variant, &stored);
        }

        let folded_key = fold_diacritics(&key);
        if folded_key != key {
            self.register(&folded_key, &stored);
        }
        if has_diacritics(&stored) {
            let folded_word = normalize_token(&fold_diacritics(&stored), self.config.use_lowercase);
            self.register(&folded_word, &stored);
        }

        self.cache.get_mut().clear();
    }

    /// Add every entry of a word list, then clear the cache.
    pub fn build_from_word_list(&mut self, entries: &[DictionaryEntry]) {
        for entry in entries {
            self.add_word(entry.word(), entry.count());
        }
        self.cache.get_mut().clear();
        debug!(
            "indexed {} entries: {} words, {} delete keys",
            entries.len(),
            self.freq.len(),
            self.deletes.len()
        );
    }

    /// Find ranked corrections for `input`.
    ///
    /// With `max_distance` unset, the bound is chosen from the key length
    /// (see [`GeneratorConfig::short_word_threshold`]). Results are ordered by
    /// distance, then count (descending), then closeness in length to the
    /// input, then term, and truncated to `max_suggestions`.
    pub fn lookup(&self, input: &str, max_distance: Option<usize>) -> Vec<Candidate> {
        let use_lowercase = self.config.use_lowercase;
        let key = normalize_token(input, use_lowercase);
        if key.is_empty() {
            return Vec::new();
        }

        // Split before lowercasing so camelCase boundaries survive.
        let mut tokens = split_identifier(&normalize_token(input, false), use_lowercase);
        tokens.sort_by_key(|token| std::cmp::Reverse(char_len(token)));

        // Spellings sharing a key can still split differently ("fooBar", "foobar").
        let cache_key = (key.clone(), max_distance, tokens.clone());
        if let Some(hit) = self.cache.lock().get(&cache_key) {
            trace!("cache hit for {key:?}");
            return hit;
        }

        let bound = self.effective_max_distance(&key, max_distance);

        // None marks a candidate whose distance still has to be verified.
        let mut pool: AHashMap<String, Option<usize>> = AHashMap::new();
        self.probe_deletions(&key, bound, &mut pool);

        for token in &tokens {
            self.probe(token, &mut pool);
        }

        if pool.is_empty() {
            self.probe(&key, &mut pool);
        }
        if pool.is_empty() {
            self.scan_folded(&key, bound, &mut pool);
        }

        let input_len = char_len(&key);
        let mut ranked: Vec<(Candidate, usize)> = pool
            .into_iter()
            .filter_map(|(term, known)| {
                let term_key = normalize_token(&term, use_lowercase);
                let distance = match known {
                    // Set by the folded scan; measured between accent-folded forms.
                    Some(distance) => distance,
                    None => bounded_levenshtein(&key, &term_key, bound)?,
                };
                let count = self.freq.get(&term).copied().unwrap_or(0);
                let len_diff = char_len(&term_key).abs_diff(input_len);
                Some((
                    Candidate {
                        term,
                        distance,
                        count,
                    },
                    len_diff,
                ))
            })
            .collect();

        ranked.sort_by(|(a, a_diff), (b, b_diff)| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.count.cmp(&a.count))
                .then_with(|| a_diff.cmp(b_diff))
                .then_with(|| a.term.cmp(&b.term))
        });

        let results: Vec<Candidate> = ranked
            .into_iter()
            .take(self.config.max_suggestions)
            .map(|(candidate, _)| candidate)
            .collect();

        debug!(
            "lookup {key:?} (max distance {bound}): {} candidates",
            results.len()
        );
        self.cache.lock().put(cache_key, results.clone());
        results
    }

    /// Serialize the delete and frequency indices to JSON.
    ///
    /// Keys and buckets are sorted so identical indices export identically.
    pub fn export_index(&self) -> Result<String> {
        let deletes = self
            .deletes
            .iter()
            .map(|(key, words)| {
                let mut words: Vec<String> = words.iter().cloned().collect();
                words.sort();
                (key.clone(), words)
            })
            .collect();
        let freq = self
            .freq
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        Ok(serde_json::to_string(&IndexSnapshot { deletes, freq })?)
    }

    /// Replace the in-memory indices with an exported snapshot.
    ///
    /// Fails without touching the current state if the JSON does not parse or
    /// a delete bucket names a word that has no frequency entry.
    pub fn import_index(&mut self, json: &str) -> Result<()> {
        let snapshot: IndexSnapshot = serde_json::from_str(json)?;

        for (key, words) in &snapshot.deletes {
            if let Some(word) = words.iter().find(|w| !snapshot.freq.contains_key(*w)) {
                return Err(LexfixError::index(format!(
                    "delete key {key:?} refers to unknown word {word:?}"
                )));
            }
        }

        self.deletes = snapshot
            .deletes
            .into_iter()
            .map(|(key, words)| (key, words.into_iter().collect::<AHashSet<String>>()))
            .collect();
        self.freq = snapshot.freq.into_iter().collect();
        self.cache.get_mut().clear();

        debug!(
            "imported index: {} words, {} delete keys",
            self.freq.len(),
            self.deletes.len()
        );
        Ok(())
    }

    /// Whether a word with exactly this normalized key is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        let key = normalize_token(word, self.config.use_lowercase);
        self.deletes.get(&key).is_some_and(|words| {
            words
                .iter()
                .any(|w| normalize_token(w, self.config.use_lowercase) == key)
        })
    }

    /// Cumulative count of an original word, 0 when absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.freq
            .get(&normalize_token(word, false))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct original words.
    pub fn word_count(&self) -> usize {
        self.freq.len()
    }

    /// Number of distinct keys in the delete index.
    pub fn delete_key_count(&self) -> usize {
        self.deletes.len()
    }

    /// Number of cached lookup results.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    fn register(&mut self, key: &str, word: &str) {
        self.deletes
            .entry(key.to_string())
            .or_default()
            .insert(word.to_string());
    }

    fn effective_max_distance(&self, key: &str, requested: Option<usize>) -> usize {
        if let Some(requested) = requested {
            return requested;
        }
        let len = char_len(key);
        if len <= self.config.short_word_threshold {
            1
        } else if len <= 8 {
            self.config.max_edit.min(2)
        } else {
            self.config.max_edit.min(3)
        }
    }

    /// Distinct strings reachable by deleting 1..=max_edit characters, level
    /// by level, stopping early once `max_queue_size` is exceeded.
    fn generate_deletes(&self, key: &str) -> Vec<String> {
        let mut seen: AHashSet<String> = AHashSet::new();
        seen.insert(key.to_string());
        let mut results = Vec::new();
        let mut frontier = vec![key.to_string()];

        'levels: for _ in 0..self.config.max_edit {
            let mut next = Vec::new();
            for token in &frontier {
                for variant in single_deletions(token) {
                    if seen.insert(variant.clone()) {
                        results.push(variant.clone());
                        next.push(variant);
                        if seen.len() > self.config.max_queue_size {
                            warn!(
                                "delete generation for {key:?} stopped at {} variants",
                                self.config.max_queue_size
                            );
                            break 'levels;
                        }
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        results
    }

    /// Walk the query's deletions breadth first, probing each level's
    /// frontier before expanding it.
    fn probe_deletions(
        &self,
        key: &str,
        bound: usize,
        pool: &mut AHashMap<String, Option<usize>>,
    ) {
        let mut seen: AHashSet<String> = AHashSet::new();
        seen.insert(key.to_string());
        let mut frontier = vec![key.to_string()];
        let mut depth = 0;
        let mut guard_hit = false;

        loop {
            for token in &frontier {
                self.probe(token, pool);
            }
            if depth >= bound || guard_hit {
                break;
            }

            let mut next = Vec::new();
            'expand: for token in &frontier {
                for variant in single_deletions(token) {
                    if seen.insert(variant.clone()) {
                        next.push(variant);
                        if seen.len() > self.config.max_queue_size {
                            warn!(
                                "query expansion for {key:?} stopped at {} variants",
                                self.config.max_queue_size
                            );
                            guard_hit = true;
                            break 'expand;
                        }
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
            depth += 1;
        }
    }

    fn probe(&self, token: &str, pool: &mut AHashMap<String, Option<usize>>) {
        if let Some(words) = self.deletes.get(token) {
            for word in words {
                pool.entry(word.clone()).or_insert(None);
            }
        }
    }

    /// Last resort: compare the accent-folded query with the accent-folded
    /// form of every dictionary word.
    fn scan_folded(&self, key: &str, bound: usize, pool: &mut AHashMap<String, Option<usize>>) {
        let folded_input = fold_diacritics(key);
        for word in self.freq.keys() {
            let folded = fold_diacritics(&normalize_token(word, self.config.use_lowercase));
            if let Some(distance) = bounded_levenshtein(&folded_input, &folded, bound) {
                pool.insert(word.clone(), Some(distance));
            }
        }
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Every string obtained by removing exactly one character.
fn single_deletions(token: &str) -> impl Iterator<Item = String> + '_ {
    token
        .char_indices()
        .map(move |(idx, ch)| format!("{}{}", &token[..idx], &token[idx + ch.len_utf8()..]))
}
