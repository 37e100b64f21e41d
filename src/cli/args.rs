//! Command line argument parsing for the Lexfix CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::spelling::suggest::{RerankMode, SuggestOptions};

/// Lexfix - fuzzy spelling suggestions from a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "lexfix")]
#[command(about = "Fuzzy spelling suggestions backed by a delete index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexfixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexfixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for one or more words
    Suggest(SuggestArgs),

    /// Report words of a text that are not in the dictionary
    Check(CheckArgs),

    /// Show edit distances between two strings
    Distance(DistanceArgs),

    /// Build an index from a word list and print it as JSON
    #[command(name = "export-index")]
    ExportIndex(ExportIndexArgs),
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Words to correct
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,

    /// Word list (JSON array or one `word [count]` per line)
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dict: PathBuf,

    /// Maximum edit distance (default: chosen from the word length)
    #[arg(short = 'm', long)]
    pub max_distance: Option<usize>,

    /// Number of suggestions per word
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Rerank candidates before truncating
    #[arg(short, long)]
    pub rerank: Option<RerankArg>,

    /// Number of reranked suggestions to keep
    #[arg(long)]
    pub rerank_top_k: Option<usize>,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,
}

impl SuggestArgs {
    /// Map the flags onto orchestrator options.
    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            num_suggestions: self.count,
            max_distance: self.max_distance,
            rerank: self.rerank.map(RerankMode::from),
            rerank_top_k: self.rerank_top_k,
            use_lowercase: !self.case_sensitive,
        }
    }
}

/// Rerank strategies available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RerankArg {
    /// Damerau-Levenshtein cost
    Damerau,
}

impl From<RerankArg> for RerankMode {
    fn from(arg: RerankArg) -> Self {
        match arg {
            RerankArg::Damerau => RerankMode::Damerau,
        }
    }
}

/// Arguments for checking a text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word list (JSON array or one `word [count]` per line)
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dict: PathBuf,

    /// Text file to check (reads stdin when omitted)
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: Option<PathBuf>,

    /// Number of suggestions per unknown word
    #[arg(short = 'n', long, default_value = "3")]
    pub count: usize,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Arguments for comparing two strings
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,

    /// Bound for the bounded metrics (default: unbounded)
    #[arg(short = 'm', long)]
    pub max_distance: Option<usize>,
}

/// Arguments for exporting an index
#[derive(Parser, Debug, Clone)]
pub struct ExportIndexArgs {
    /// Word list (JSON array or one `word [count]` per line)
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dict: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Deepest deletion level to index
    #[arg(long, default_value = "2")]
    pub max_edit: usize,

    /// Keep original case in index keys
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_suggest_command() {
        let args = LexfixArgs::try_parse_from([
            "lexfix",
            "suggest",
            "helo",
            "wrld",
            "--dict",
            "words.txt",
            "--count",
            "3",
            "--rerank",
            "damerau",
            "--rerank-top-k",
            "5",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.words, vec!["helo", "wrld"]);
            assert_eq!(suggest_args.dict, PathBuf::from("words.txt"));

            let options = suggest_args.suggest_options();
            assert_eq!(options.num_suggestions, 3);
            assert_eq!(options.max_distance, None);
            assert_eq!(options.rerank, Some(RerankMode::Damerau));
            assert_eq!(options.rerank_top_k, Some(5));
            assert!(options.use_lowercase);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_suggest_requires_words() {
        assert!(LexfixArgs::try_parse_from(["lexfix", "suggest", "--dict", "words.txt"]).is_err());
    }

    #[test]
    fn test_case_sensitive_flag() {
        let args = LexfixArgs::try_parse_from([
            "lexfix",
            "suggest",
            "Helo",
            "-d",
            "words.txt",
            "--case-sensitive",
            "-m",
            "1",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            let options = suggest_args.suggest_options();
            assert!(!options.use_lowercase);
            assert_eq!(options.max_distance, Some(1));
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_distance_command() {
        let args = LexfixArgs::try_parse_from(["lexfix", "distance", "kitten", "sitting"]).unwrap();

        if let Command::Distance(distance_args) = args.command {
            assert_eq!(distance_args.a, "kitten");
            assert_eq!(distance_args.b, "sitting");
            assert_eq!(distance_args.max_distance, None);
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_export_index_command() {
        let args = LexfixArgs::try_parse_from([
            "lexfix",
            "export-index",
            "--dict",
            "words.json",
            "--output",
            "index.json",
        ])
        .unwrap();

        if let Command::ExportIndex(export_args) = args.command {
            assert_eq!(export_args.output, Some(PathBuf::from("index.json")));
            assert_eq!(export_args.max_edit, 2);
        } else {
            panic!("Expected ExportIndex command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = LexfixArgs::try_parse_from(["lexfix", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = LexfixArgs::try_parse_from(["lexfix", "-vv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            LexfixArgs::try_parse_from(["lexfix", "--quiet", "-vvv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            LexfixArgs::try_parse_from(["lexfix", "--format", "json", "distance", "a", "b"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
