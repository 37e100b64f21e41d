//! Token normalization shared by the index, the reranker and the lookup path.
//!
//! Every string that is compared or used as an index key goes through
//! [`normalize_token`] first, so composed and decomposed spellings of the same
//! word (`"café"` vs `"cafe\u{301}"`) always meet on the same key.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-.\s]+").expect("separator pattern"));
static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu}|[0-9])").expect("camel case pattern"));
static ACRONYM_THEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Lu})(\p{Lu}\p{Ll})").expect("acronym pattern"));

/// Canonicalize a token: NFC, trimmed, optionally lowercased.
pub fn normalize_token(s: &str, lowercase: bool) -> String {
    let composed: String = s.nfc().collect();
    let trimmed = composed.trim();
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

/// Strip combining marks: NFD, drop marks, recompose.
pub fn fold_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Whether the string carries at least one combining mark once decomposed.
pub fn has_diacritics(s: &str) -> bool {
    s.nfd().any(is_combining_mark)
}

/// Length in characters, the unit every distance in this crate is measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split an identifier into its fragments.
///
/// Separators are `_`, `-`, `.` and whitespace; inside each piece a boundary
/// is placed between a lowercase letter and a following uppercase letter or
/// digit, and between an acronym and a following capitalized word
/// (`"getHTTPResponse"` → `get`, `HTTP`, `Response`). The whole token is
/// always included. Fragments are normalized with [`normalize_token`] and
/// deduplicated in order of first appearance.
pub fn split_identifier(token: &str, lowercase: bool) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();

    for piece in SEPARATORS.split(token) {
        if piece.is_empty() {
            continue;
        }
        let spaced = LOWER_THEN_UPPER.replace_all(piece, "$1 $2");
        let spaced = ACRONYM_THEN_WORD.replace_all(&spaced, "$1 $2");
        parts.extend(
            spaced
                .split_whitespace()
                .map(|sub| normalize_token(sub, lowercase)),
        );
    }
    parts.push(normalize_token(token, lowercase));

    let mut seen = ahash::AHashSet::new();
    parts.retain(|p| !p.is_empty() && seen.insert(p.clone()));
    parts
}
