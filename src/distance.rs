//! Edit distance functions used by both indexes.
//!
//! [`damerau`] holds the default metric (Damerau-Levenshtein with adjacent
//! transpositions) and the non-metric optimal string alignment variant, [`levenshtein`] a plain Levenshtein alternative,
//! and [`metric`] the [`EditDistance`] trait the indexes are generic over.

pub mod damerau;
pub mod levenshtein;
pub mod metric;

// Re-export commonly used types
pub use damerau::*;
pub use levenshtein::*;
pub use metric::*;
