//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::bktree::MetricMatch;
use crate::cli::args::{FuzzmatchArgs, OutputFormat};
use crate::error::Result;
use crate::trie::{FuzzySuggestion, Suggestion};

/// Result structure for similarity search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub query: String,
    pub max_distance: usize,
    pub matches: Vec<ScoredMatch>,
    pub visited: usize,
    pub vocabulary_size: usize,
}

/// A metric match with its normalized similarity.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub found: MetricMatch,
    pub similarity: f64,
}

/// Result structure for prefix suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestOutput {
    pub prefix: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for fuzzy suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct FuzzyOutput {
    pub query: String,
    pub max_distance: usize,
    pub suggestions: Vec<FuzzySuggestion>,
}

/// Vocabulary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub entries_read: usize,
    pub distinct_words: usize,
    pub total_frequency: u64,
    pub longest_word: Option<String>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for SearchOutput {
    fn human_lines(&self) -> Vec<String> {
        if self.matches.is_empty() {
            return vec![format!(
                "No words within distance {} of {:?}",
                self.max_distance, self.query
            )];
        }
        self.matches
            .iter()
            .map(|m| {
                format!(
                    "{}\tdistance={}\tsimilarity={:.3}",
                    m.found.word, m.found.distance, m.similarity
                )
            })
            .collect()
    }
}

impl HumanOutput for SuggestOutput {
    fn human_lines(&self) -> Vec<String> {
        if self.suggestions.is_empty() {
            return vec![format!("No words start with {:?}", self.prefix)];
        }
        self.suggestions
            .iter()
            .map(|s| format!("{}\tfrequency={}", s.word, s.frequency))
            .collect()
    }
}

impl HumanOutput for FuzzyOutput {
    fn human_lines(&self) -> Vec<String> {
        if self.suggestions.is_empty() {
            return vec![format!(
                "No words within distance {} of {:?}",
                self.max_distance, self.query
            )];
        }
        self.suggestions
            .iter()
            .map(|s| {
                format!(
                    "{}\tdistance={}\tfrequency={}",
                    s.word, s.distance, s.frequency
                )
            })
            .collect()
    }
}

impl HumanOutput for VocabularyStats {
    fn human_lines(&self) -> Vec<String> {
        vec![
            format!("Entries read:    {}", self.entries_read),
            format!("Distinct words:  {}", self.distinct_words),
            format!("Total frequency: {}", self.total_frequency),
            format!(
                "Longest word:    {}",
                self.longest_word.as_deref().unwrap_or("-")
            ),
        ]
    }
}

/// Render a result in the selected format.
pub fn render<T: Serialize + HumanOutput>(result: &T, args: &FuzzmatchArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.human_lines().join("\n")),
        OutputFormat::Json => {
            if args.pretty {
                Ok(serde_json::to_string_pretty(result)?)
            } else {
                Ok(serde_json::to_string(result)?)
            }
        }
    }
}

/// Output a result to stdout in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FuzzmatchArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", render(result, args)?);
    Ok(())
}
