//! Edit distance metrics for spelling correction.
//!
//! All metrics work on `char`s, not bytes. Bounded variants return `None`
//! when the true distance is larger than the requested bound; pass
//! `usize::MAX` for an unbounded computation.

use std::cmp::min;

use ahash::AHashMap;
use unicode_normalization::UnicodeNormalization;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Levenshtein distance restricted to a diagonal band of width `2 * max_distance + 1`.
///
/// Both inputs are NFC-normalized first. Returns `None` as soon as the
/// distance is known to exceed `max_distance`: immediately when the lengths
/// differ by more than the bound, otherwise when every cell of a DP row is
/// over the bound. The result does not depend on argument order.
pub fn bounded_levenshtein(s1: &str, s2: &str, max_distance: usize) -> Option<usize> {
    let a: Vec<char> = s1.nfc().collect();
    let b: Vec<char> = s2.nfc().collect();
    if a == b {
        return Some(0);
    }

    // Iterate over the longer string so the rows span the shorter one.
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let n = short.len();
    let m = long.len();

    if m - n > max_distance {
        return None;
    }
    if n == 0 {
        return Some(m);
    }

    // The distance never exceeds `m`, so clamping keeps the arithmetic small.
    let bound = max_distance.min(m);
    let out_of_band = bound + 1;

    let mut prev: Vec<usize> = (0..=n).map(|i| i.min(out_of_band)).collect();
    let mut curr = vec![out_of_band; n + 1];

    for j in 1..=m {
        curr[0] = j.min(out_of_band);
        let low = j.saturating_sub(bound).max(1);
        let high = (j + bound).min(n);
        curr[1..low].fill(out_of_band);

        let ch = long[j - 1];
        for i in low..=high {
            let cost = usize::from(short[i - 1] != ch);
            curr[i] = (curr[i - 1] + 1) // insertion
                .min(prev[i] + 1) // deletion
                .min(prev[i - 1] + cost) // substitution
                .min(out_of_band);
        }
        if high < n {
            curr[high + 1..].fill(out_of_band);
        }

        if curr.iter().all(|&value| value > bound) {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= bound).then_some(distance)
}

/// Unrestricted Damerau-Levenshtein distance.
///
/// Unlike the optimal-string-alignment variant, a transposed pair may have
/// other edits between its characters (`"ca"` → `"abc"` costs 2). The whole
/// `(n + 2) × (m + 2)` table is computed because transpositions look back
/// arbitrarily far; the outer border holds `n + m`, larger than any real
/// distance. Returns `None` when the distance exceeds `max_distance`.
pub fn damerau_levenshtein(s1: &str, s2: &str, max_distance: usize) -> Option<usize> {
    if s1 == s2 {
        return Some(0);
    }

    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let n = a.len();
    let m = b.len();

    if n.abs_diff(m) > max_distance {
        return None;
    }

    let sentinel = n + m;
    let width = m + 2;
    let at = |i: usize, j: usize| i * width + j;

    let mut d = vec![0usize; (n + 2) * width];
    d[at(0, 0)] = sentinel;
    for i in 0..=n {
        d[at(i + 1, 0)] = sentinel;
        d[at(i + 1, 1)] = i;
    }
    for j in 0..=m {
        d[at(0, j + 1)] = sentinel;
        d[at(1, j + 1)] = j;
    }

    // Last row in which each source character was seen.
    let mut da: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=n {
        // Last column in this row where the source character matched.
        let mut db = 0;
        for j in 1..=m {
            let i1 = da.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = db;
            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            d[at(i + 1, j + 1)] = (d[at(i, j)] + cost) // substitution
                .min(d[at(i + 1, j)] + 1) // insertion
                .min(d[at(i, j + 1)] + 1) // deletion
                .min(d[at(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
        }
        da.insert(a[i - 1], i);
    }

    let distance = d[at(n + 1, m + 1)];
    (distance <= max_distance).then_some(distance)
}
