//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexfixArgs, OutputFormat};
use crate::error::Result;

/// Suggestions for a single input word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSuggestions {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub results: Vec<WordSuggestions>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// A word of the checked text that is not in the dictionary.
#[derive(Debug, Serialize, Deserialize)]
pub struct UnknownWord {
    pub word: String,
    /// Byte offset into the checked text.
    pub offset: usize,
    pub suggestions: Vec<String>,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub words_checked: usize,
    pub unknown: Vec<UnknownWord>,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub max_distance: Option<usize>,
    pub levenshtein: usize,
    /// `None` when the bound is exceeded.
    pub bounded_levenshtein: Option<usize>,
    pub damerau_levenshtein: Option<usize>,
}

/// Result structure for an index export written to a file.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub path: String,
    pub words: usize,
    pub delete_keys: usize,
    pub bytes: usize,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for SuggestResults {
    fn human_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|result| {
                if result.suggestions.is_empty() {
                    format!("{}: (no suggestions)", result.word)
                } else {
                    format!("{}: {}", result.word, result.suggestions.join(", "))
                }
            })
            .collect()
    }
}

impl HumanOutput for CheckResults {
    fn human_lines(&self) -> Vec<String> {
        if self.unknown.is_empty() {
            return vec![format!("{} words checked, all known", self.words_checked)];
        }

        let mut lines: Vec<String> = self
            .unknown
            .iter()
            .map(|unknown| {
                let suggestions = if unknown.suggestions.is_empty() {
                    "(no suggestions)".to_string()
                } else {
                    unknown.suggestions.join(", ")
                };
                format!("{} @{}: {suggestions}", unknown.word, unknown.offset)
            })
            .collect();
        lines.push(format!(
            "{} of {} words unknown",
            self.unknown.len(),
            self.words_checked
        ));
        lines
    }
}

impl HumanOutput for DistanceResult {
    fn human_lines(&self) -> Vec<String> {
        vec![
            format!("levenshtein: {}", self.levenshtein),
            format!(
                "bounded levenshtein: {}",
                format_bounded(self.bounded_levenshtein)
            ),
            format!(
                "damerau-levenshtein: {}",
                format_bounded(self.damerau_levenshtein)
            ),
        ]
    }
}

impl HumanOutput for ExportResult {
    fn human_lines(&self) -> Vec<String> {
        vec![
            format!("path: {}", self.path),
            format!("words: {}", self.words),
            format!("delete keys: {}", self.delete_keys),
            format!("size: {}", format_bytes(self.bytes as u64)),
        ]
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LexfixArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            output_human(message, result, args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &LexfixArgs) {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    for line in result.human_lines() {
        println!("{line}");
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexfixArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

pub(crate) fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

fn format_bounded(distance: Option<usize>) -> String {
    match distance {
        Some(distance) => distance.to_string(),
        None => "over bound".to_string(),
    }
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
