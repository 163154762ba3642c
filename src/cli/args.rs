//! Command line argument parsing for the fuzzmatch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// fuzzmatch - fuzzy matching and autocomplete over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "fuzzmatch")]
#[command(about = "Fuzzy matching and autocomplete over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FuzzmatchArgs {
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

    /// JSON file with query defaults (max_distance, limit)
    #[arg(short, long, env = "FUZZMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FuzzmatchArgs {
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
    /// Find vocabulary words within an edit distance of a query
    Search(SearchArgs),

    /// Complete a prefix, most frequent words first
    Suggest(SuggestArgs),

    /// Typo-tolerant suggestions over the whole vocabulary
    Fuzzy(FuzzyArgs),

    /// Show vocabulary statistics
    Stats(StatsArgs),
}

/// Arguments for similarity search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Vocabulary file, one `word [weight]` per line
    #[arg(long = "vocab", value_name = "FILE")]
    pub vocab_path: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum edit distance (overrides the config file)
    #[arg(short = 'd', long)]
    pub max_distance: Option<usize>,
}

/// Arguments for prefix suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Vocabulary file, one `word [weight]` per line
    #[arg(long = "vocab", value_name = "FILE")]
    pub vocab_path: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of suggestions (overrides the config file)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for fuzzy suggestions
#[derive(Parser, Debug, Clone)]
pub struct FuzzyArgs {
    /// Vocabulary file, one `word [weight]` per line
    #[arg(long = "vocab", value_name = "FILE")]
    pub vocab_path: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum edit distance (overrides the config file)
    #[arg(short = 'd', long)]
    pub max_distance: Option<usize>,

    /// Maximum number of suggestions (overrides the config file)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Vocabulary file, one `word [weight]` per line
    #[arg(long = "vocab", value_name = "FILE")]
    pub vocab_path: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

    #[test]
    fn test_parse_search() {
        let args = FuzzmatchArgs::try_parse_from([
            "fuzzmatch",
            "search",
            "--vocab",
            "words.txt",
            "brigadero",
            "-d",
            "1",
        ])
        .unwrap();

        match args.command {
            Command::Search(search) => {
                assert_eq!(search.vocab_path, PathBuf::from("words.txt"));
                assert_eq!(search.query, "brigadero");
                assert_eq!(search.max_distance, Some(1));
            }
            other => panic!("Expected search command, got {other:?}"),
        }
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_verbosity() {
        let args =
            FuzzmatchArgs::try_parse_from(["fuzzmatch", "stats", "--vocab", "w.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            FuzzmatchArgs::try_parse_from(["fuzzmatch", "-vvv", "stats", "--vocab", "w.txt"])
                .unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            FuzzmatchArgs::try_parse_from(["fuzzmatch", "-q", "-vv", "stats", "--vocab", "w.txt"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_fuzzy_json() {
        let args = FuzzmatchArgs::try_parse_from([
            "fuzzmatch", "--format", "json", "fuzzy", "--vocab", "w.txt", "cakr", "-n", "3",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Fuzzy(fuzzy) => {
                assert_eq!(fuzzy.limit, Some(3));
                assert_eq!(fuzzy.max_distance, None);
            }
            other => panic!("Expected fuzzy command, got {other:?}"),
        }
    }

    #[test]
    fn test_vocab_is_required() {
        let result = FuzzmatchArgs::try_parse_from(["fuzzmatch", "suggest", "bri"]);
        assert!(result.is_err());

        let args =
            FuzzmatchArgs::try_parse_from(["fuzzmatch", "suggest", "bri", "--vocab", "w.txt"])
                .unwrap();
        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.vocab_path, PathBuf::from("w.txt"));
                assert_eq!(suggest.prefix, "bri");
            }
            other => panic!("Expected suggest command, got {other:?}"),
        }
    }
}
