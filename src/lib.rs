//! # fuzzmatch
//!
//! Fuzzy text matching over an in-memory vocabulary.
//!
//! ## Features
//!
//! - Damerau-Levenshtein distance with a cap for early termination
//! - BK-tree similarity search that prunes with the triangle inequality
//! - Prefix trie with frequency-ranked autocomplete and fuzzy suggestions
//! - Pluggable distance functions, including plain closures
//!
//! Strings are indexed verbatim. Normalize case and accents before inserting.

pub mod bktree;
pub mod cli;
pub mod config;
pub mod distance;
pub mod error;
pub mod index;
pub mod trie;
pub mod vocabulary;

pub mod prelude {
    pub use crate::bktree::{MetricMatch, MetricTree};
    pub use crate::config::IndexConfig;
    pub use crate::distance::{DamerauLevenshtein, EditDistance, Levenshtein};
    pub use crate::error::{Error, Result};
    pub use crate::index::{SharedIndex, VocabularyIndex};
    pub use crate::trie::{FuzzySuggestion, PrefixTrie, Suggestion};
    pub use crate::vocabulary::WeightedWord;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
