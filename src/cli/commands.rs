//! Command implementations for the fuzzmatch CLI.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::IndexConfig;
use crate::distance::similarity_ratio;
use crate::error::Result;
use crate::index::VocabularyIndex;
use crate::vocabulary::load_vocabulary;

/// Execute a CLI command.
pub fn execute_command(args: FuzzmatchArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::default(),
    };

    match &args.command {
        Command::Search(search_args) => run_search(search_args, config, &args),
        Command::Suggest(suggest_args) => run_suggest(suggest_args, config, &args),
        Command::Fuzzy(fuzzy_args) => run_fuzzy(fuzzy_args, config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load a vocabulary file into both indexes.
fn build_index(vocab_path: &Path, config: IndexConfig) -> Result<VocabularyIndex> {
    config.validate()?;

    let entries = load_vocabulary(vocab_path)?;
    let start_time = Instant::now();
    let index = VocabularyIndex::from_entries(entries, config);

    info!(
        "indexed {} words from {} in {:?}",
        index.len(),
        vocab_path.display(),
        start_time.elapsed()
    );
    Ok(index)
}

/// Similarity search through the metric tree.
fn run_search(args: &SearchArgs, mut config: IndexConfig, cli_args: &FuzzmatchArgs) -> Result<()> {
    if let Some(max_distance) = args.max_distance {
        config.max_distance = max_distance;
    }
    let index = build_index(&args.vocab_path, config)?;

    let (matches, stats) = index
        .tree()
        .search_with_stats(&args.query, index.config().max_distance);

    let matches = matches
        .into_iter()
        .map(|found| ScoredMatch {
            similarity: similarity_ratio(&args.query, &found.word),
            found,
        })
        .collect();

    output_result(
        "Similar words",
        &SearchOutput {
            query: args.query.clone(),
            max_distance: index.config().max_distance,
            matches,
            visited: stats.visited,
            vocabulary_size: index.len(),
        },
        cli_args,
    )
}

/// Prefix completion through the trie.
fn run_suggest(
    args: &SuggestArgs,
    mut config: IndexConfig,
    cli_args: &FuzzmatchArgs,
) -> Result<()> {
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    let index = build_index(&args.vocab_path, config)?;

    output_result(
        "Suggestions",
        &SuggestOutput {
            prefix: args.prefix.clone(),
            suggestions: index.autocomplete(&args.prefix),
        },
        cli_args,
    )
}

/// Typo-tolerant completion through the trie's full scan.
fn run_fuzzy(args: &FuzzyArgs, mut config: IndexConfig, cli_args: &FuzzmatchArgs) -> Result<()> {
    if let Some(max_distance) = args.max_distance {
        config.max_distance = max_distance;
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    let index = build_index(&args.vocab_path, config)?;

    output_result(
        "Fuzzy suggestions",
        &FuzzyOutput {
            query: args.query.clone(),
            max_distance: index.config().max_distance,
            suggestions: index.autocomplete_fuzzy(&args.query),
        },
        cli_args,
    )
}

/// Summarize a vocabulary file.
fn show_stats(args: &StatsArgs, cli_args: &FuzzmatchArgs) -> Result<()> {
    let entries = load_vocabulary(&args.vocab_path)?;
    let entries_read = entries.len();
    let index = VocabularyIndex::from_entries(entries, IndexConfig::default());

    let trie = index.trie();
    let total_frequency = trie.entries().map(|(_, frequency)| frequency).sum();
    let longest_word = trie
        .entries()
        .map(|(word, _)| word)
        .max_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| b.cmp(a))
        })
        .map(str::to_string);

    output_result(
        "Vocabulary statistics",
        &VocabularyStats {
            entries_read,
            distinct_words: index.len(),
            total_frequency,
            longest_word,
        },
        cli_args,
    )
}
