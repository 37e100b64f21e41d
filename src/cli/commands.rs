//! Command implementations for the Lexfix CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexfixError, Result};
use crate::spelling::dictionary::{DictionaryEntry, load_word_list};
use crate::spelling::generator::{CandidateGenerator, GeneratorConfig};
use crate::spelling::levenshtein::{
    bounded_levenshtein, damerau_levenshtein, levenshtein_distance,
};
use crate::spelling::suggest::{CandidateSource, SuggestOptions, suggest_with_optional_rerank};

/// Execute a CLI command.
pub fn execute_command(args: LexfixArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args.clone(), &args),
        Command::Check(check_args) => check_text(check_args.clone(), &args),
        Command::Distance(distance_args) => show_distance(distance_args.clone(), &args),
        Command::ExportIndex(export_args) => export_index(export_args.clone(), &args),
    }
}

/// Suggest corrections for every word on the command line.
fn suggest_words(args: SuggestArgs, cli_args: &LexfixArgs) -> Result<()> {
    if args.count == 0 {
        return Err(LexfixError::invalid_argument(
            "--count must be at least 1",
        ));
    }

    let start_time = Instant::now();
    let entries = load_dictionary(&args.dict)?;
    let options = args.suggest_options();
    let generator = CandidateGenerator::from_entries(generator_config(&options), &entries);

    // One frozen index, many concurrent lookups.
    let results: Vec<WordSuggestions> = args
        .words
        .par_iter()
        .map(|word| WordSuggestions {
            word: word.clone(),
            suggestions: suggest_with_optional_rerank(
                word,
                CandidateSource::indexed_with_fallback(&generator, &entries),
                &options,
            ),
        })
        .collect();

    let duration = start_time.elapsed();
    info!(
        "suggested {} words in {} ms",
        results.len(),
        duration.as_millis()
    );

    output_result(
        "Suggestions",
        &SuggestResults {
            results,
            dictionary_words: generator.word_count(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Report words of a text that the dictionary does not contain.
fn check_text(args: CheckArgs, cli_args: &LexfixArgs) -> Result<()> {
    let entries = load_dictionary(&args.dict)?;
    let text = match &args.text_file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = SuggestOptions {
        num_suggestions: args.count,
        use_lowercase: !args.case_sensitive,
        ..Default::default()
    };
    let generator = CandidateGenerator::from_entries(generator_config(&options), &entries);

    let words: Vec<(usize, &str)> = text.unicode_word_indices().collect();
    let unknown: Vec<UnknownWord> = words
        .par_iter()
        .filter(|(_, word)| !is_numeric(word) && !generator.contains(word))
        .map(|&(offset, word)| UnknownWord {
            word: word.to_string(),
            offset,
            suggestions: suggest_with_optional_rerank(
                word,
                CandidateSource::indexed(&generator),
                &options,
            ),
        })
        .collect();

    info!("{} of {} words unknown", unknown.len(), words.len());

    output_result(
        "Check results",
        &CheckResults {
            words_checked: words.len(),
            unknown,
        },
        cli_args,
    )
}

/// Show all three metrics for a pair of strings.
fn show_distance(args: DistanceArgs, cli_args: &LexfixArgs) -> Result<()> {
    let bound = args.max_distance.unwrap_or(usize::MAX);
    let result = DistanceResult {
        levenshtein: levenshtein_distance(&args.a, &args.b),
        bounded_levenshtein: bounded_levenshtein(&args.a, &args.b, bound),
        damerau_levenshtein: damerau_levenshtein(&args.a, &args.b, bound),
        max_distance: args.max_distance,
        a: args.a,
        b: args.b,
    };

    output_result("Edit distances", &result, cli_args)
}

/// Build an index from a word list and write its JSON export.
fn export_index(args: ExportIndexArgs, cli_args: &LexfixArgs) -> Result<()> {
    let entries = load_dictionary(&args.dict)?;
    let config = GeneratorConfig {
        max_edit: args.max_edit,
        use_lowercase: !args.case_sensitive,
        ..Default::default()
    };
    let generator = CandidateGenerator::from_entries(config, &entries);

    let mut json = generator.export_index()?;
    if cli_args.pretty {
        let value: serde_json::Value = serde_json::from_str(&json)?;
        json = to_json(&value, true)?;
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            info!("wrote index to {}", path.display());
            output_result(
                "Index exported",
                &ExportResult {
                    path: path.to_string_lossy().to_string(),
                    words: generator.word_count(),
                    delete_keys: generator.delete_key_count(),
                    bytes: json.len(),
                },
                cli_args,
            )
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn load_dictionary(path: &Path) -> Result<Vec<DictionaryEntry>> {
    let entries = load_word_list(path).map_err(|e| match e {
        LexfixError::Io(io_err) => LexfixError::dictionary(format!(
            "cannot read word list {}: {io_err}",
            path.display()
        )),
        other => other,
    })?;
    info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Generator settings that give the orchestrator enough candidates to fill
/// its pre-rerank window.
fn generator_config(options: &SuggestOptions) -> GeneratorConfig {
    let window = options.num_suggestions.max(
        options
            .rerank_top_k
            .unwrap_or(options.num_suggestions.saturating_mul(2)),
    );
    GeneratorConfig {
        max_edit: options.max_distance.unwrap_or(2),
        max_suggestions: window,
        use_lowercase: options.use_lowercase,
        ..Default::default()
    }
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
}
