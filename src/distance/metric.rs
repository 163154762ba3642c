//! The pluggable distance capability shared by [`MetricTree`] and
//! [`PrefixTrie`].
//!
//! [`MetricTree`]: crate::bktree::MetricTree
//! [`PrefixTrie`]: crate::trie::PrefixTrie

use super::damerau::damerau_levenshtein_bounded;
use super::levenshtein::levenshtein_bounded;

/// A distance between two strings with an optional cap.
///
/// Implementations must be total and symmetric, and must satisfy the
/// triangle inequality. The metric tree prunes its search using that
/// inequality; a function that violates it silently produces incomplete
/// search results. This is not checked.
///
/// `distance_bounded` may stop early once the distance is known to exceed
/// `max_distance`, in which case it returns `max_distance + 1`.
///
/// Any `Fn(&str, &str, usize) -> usize` is an `EditDistance`:
///
/// ```
/// use fuzzmatch::bktree::MetricTree;
///
/// let hamming_like = |a: &str, b: &str, _max: usize| -> usize {
///     let mismatched = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
///     mismatched + a.chars().count().abs_diff(b.chars().count())
/// };
/// let tree = MetricTree::from_words_with_metric(["cat", "cot", "dog"], hamming_like);
/// assert_eq!(tree.search("cut", 1).len(), 2);
/// ```
pub trait EditDistance {
    /// Distance between `a` and `b`, capped at `max_distance + 1`.
    fn distance_bounded(&self, a: &str, b: &str, max_distance: usize) -> usize;

    /// Uncapped distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize {
        self.distance_bounded(a, b, usize::MAX)
    }
}

/// Unrestricted Damerau-Levenshtein distance. The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl EditDistance for DamerauLevenshtein {
    fn distance_bounded(&self, a: &str, b: &str, max_distance: usize) -> usize {
        damerau_levenshtein_bounded(a, b, max_distance)
    }
}

/// Plain Levenshtein distance; a transposition costs two edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl EditDistance for Levenshtein {
    fn distance_bounded(&self, a: &str, b: &str, max_distance: usize) -> usize {
        levenshtein_bounded(a, b, max_distance)
    }
}

impl<F> EditDistance for F
where
    F: Fn(&str, &str, usize) -> usize,
{
    fn distance_bounded(&self, a: &str, b: &str, max_distance: usize) -> usize {
        self(a, b, max_distance)
    }
}
