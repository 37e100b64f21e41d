//! Dictionary entries and word-list loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexfixError, Result};

/// One dictionary word, either bare (count 1) or with an explicit frequency.
///
/// Deserializes from either shape, so a JSON word list may mix them:
/// `["the", {"word": "teh", "count": 2}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictionaryEntry {
    Word(String),
    Counted {
        word: String,
        #[serde(default = "default_count")]
        count: u64,
    },
}

fn default_count() -> u64 {
    1
}

impl DictionaryEntry {
    /// Create an entry with an explicit count.
    pub fn counted<S: Into<String>>(word: S, count: u64) -> Self {
        DictionaryEntry::Counted {
            word: word.into(),
            count,
        }
    }

    /// The word as written in the list.
    pub fn word(&self) -> &str {
        match self {
            DictionaryEntry::Word(word) => word,
            DictionaryEntry::Counted { word, .. } => word,
        }
    }

    /// The frequency to insert; bare words count once.
    pub fn count(&self) -> u64 {
        match self {
            DictionaryEntry::Word(_) => 1,
            DictionaryEntry::Counted { count, .. } => *count,
        }
    }
}

impl From<&str> for DictionaryEntry {
    fn from(word: &str) -> Self {
        DictionaryEntry::Word(word.to_string())
    }
}

impl From<String> for DictionaryEntry {
    fn from(word: String) -> Self {
        DictionaryEntry::Word(word)
    }
}

impl<S: Into<String>> From<(S, u64)> for DictionaryEntry {
    fn from((word, count): (S, u64)) -> Self {
        DictionaryEntry::counted(word, count)
    }
}

/// Parse a word list.
///
/// Input starting with `[` is read as a JSON array of entries. Anything else
/// is read as text with one `word [count]` per line; blank lines and lines
/// starting with `#` are skipped.
pub fn parse_word_list(text: &str) -> Result<Vec<DictionaryEntry>> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    let mut entries = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            continue;
        };
        match parts.next() {
            None => entries.push(DictionaryEntry::from(word)),
            Some(raw) => {
                let count = raw.parse::<u64>().map_err(|e| {
                    LexfixError::dictionary(format!(
                        "line {}: invalid count {raw:?} for {word:?}: {e}",
                        line_num + 1
                    ))
                })?;
                entries.push(DictionaryEntry::counted(word, count));
            }
        }
    }

    Ok(entries)
}

/// Load a word list from a file, see [`parse_word_list`] for the formats.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>> {
    let text = fs::read_to_string(path)?;
    parse_word_list(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_entry_accessors() {
        let bare = DictionaryEntry::from("hello");
        assert_eq!(bare.word(), "hello");
        assert_eq!(bare.count(), 1);

        let counted = DictionaryEntry::from(("world", 7));
        assert_eq!(counted.word(), "world");
        assert_eq!(counted.count(), 7);
    }

    #[test]
    fn test_parse_json_mixed_shapes() {
        let entries =
            parse_word_list(r#"["the", {"word": "teh", "count": 2}, {"word": "tea"}]"#).unwrap();
        assert_eq!(
            entries,
            vec![
                DictionaryEntry::from("the"),
                DictionaryEntry::counted("teh", 2),
                DictionaryEntry::counted("tea", 1),
            ]
        );
    }

    #[test]
    fn test_parse_text_lines() {
        let text = "# common words\nhello 5\n\nworld\n  search   12  \n";
        let entries = parse_word_list(text).unwrap();
        assert_eq!(
            entries,
            vec![
                DictionaryEntry::counted("hello", 5),
                DictionaryEntry::from("world"),
                DictionaryEntry::counted("search", 12),
            ]
        );
    }

    #[test]
    fn test_parse_text_bad_count() {
        let err = parse_word_list("hello five\n").unwrap_err();
        assert!(matches!(err, LexfixError::Dictionary(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_word_list("[\"unterminated").unwrap_err();
        assert!(matches!(err, LexfixError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello 2").unwrap();
        writeln!(temp_file, "world").unwrap();
        temp_file.flush().unwrap();

        let entries = load_word_list(temp_file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].count(), 2);
        assert_eq!(entries[1].word(), "world");
    }
}
