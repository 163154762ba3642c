//! BK-tree (Burkhard-Keller metric tree) for bounded edit-distance search.
//!
//! Every stored word is a node. A child hangs off its parent under the edge
//! key `distance(parent, child)`, fixed when the child is inserted. A search
//! for words within `k` of a query only descends edges whose key lies within
//! `k` of the query's distance to the current node. By the triangle inequality
//! the other subtrees cannot contain a match.
//!
//! Nodes live in a flat arena and both insertion and search walk it
//! iteratively, so deep (degenerate) trees do not grow the call stack.
//!
//! Tree shape depends on insertion order. Average cost is logarithmic for
//! ordinary vocabularies and degrades towards linear for clustered ones; results
//! are complete either way.
//!
//! # Examples
//!
//! ```
//! use fuzzmatch::bktree::MetricTree;
//!
//! let tree = MetricTree::from_words(["brigadeiro", "beijinho", "brigadeirão"]);
//! let words: Vec<_> = tree
//!     .search("brigadero", 2)
//!     .into_iter()
//!     .map(|m| m.word)
//!     .collect();
//! assert_eq!(words, vec!["brigadeiro", "brigadeirão"]);
//! ```

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::{DamerauLevenshtein, EditDistance};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct BkNode {
    word: String,
    /// Edge distance -> child node.
    children: BTreeMap<usize, NodeId>,
}

impl BkNode {
    fn new(word: String) -> Self {
        BkNode {
            word,
            children: BTreeMap::new(),
        }
    }
}

/// A stored word found by [`MetricTree::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricMatch {
    /// The matching word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of nodes whose distance to the query was computed.
    pub visited: usize,
    /// Number of matches returned.
    pub matched: usize,
}

/// A BK-tree over words, generic over its distance function.
///
/// The metric must obey the triangle inequality. A non-metric distance makes
/// [`search`](Self::search) silently miss words; this is the caller's
/// responsibility and is not checked.
#[derive(Debug, Clone)]
pub struct MetricTree<D = DamerauLevenshtein> {
    nodes: Vec<BkNode>,
    metric: D,
}

impl MetricTree<DamerauLevenshtein> {
    /// Create an empty tree using Damerau-Levenshtein distance.
    pub fn new() -> Self {
        Self::with_metric(DamerauLevenshtein)
    }

    /// Build a Damerau-Levenshtein tree by inserting every word in order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_words_with_metric(words, DamerauLevenshtein)
    }
}

impl<D: EditDistance> MetricTree<D> {
    /// Create an empty tree using the given metric.
    pub fn with_metric(metric: D) -> Self {
        MetricTree {
            nodes: Vec::new(),
            metric,
        }
    }

    /// Build a tree with the given metric by inserting every word in order.
    pub fn from_words_with_metric<I, S>(words: I, metric: D) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::with_metric(metric);
        let mut seen = 0usize;
        for word in words {
            tree.insert(word);
            seen += 1;
        }
        debug!(
            "built metric tree with {} distinct words from {} inputs",
            tree.len(),
            seen
        );
        tree
    }

    /// The distance function this tree was built with.
    pub fn metric(&self) -> &D {
        &self.metric
    }

    /// Insert a word. Returns `false` if it was already present.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        let word = word.into();

        if self.nodes.is_empty() {
            self.nodes.push(BkNode::new(word));
            return true;
        }

        let mut current = ROOT;
        loop {
            let distance = self.metric.distance(&self.nodes[current].word, &word);
            if distance == 0 {
                return false;
            }

            match self.nodes[current].children.get(&distance) {
                Some(&child) => current = child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(BkNode::new(word));
                    self.nodes[current].children.insert(distance, id);
                    return true;
                }
            }
        }
    }

    /// Check whether `word` is stored, following a single root-to-leaf path.
    pub fn contains(&self, word: &str) -> bool {
        if self.nodes.is_empty() {
            return false;
        }

        let mut current = ROOT;
        loop {
            let distance = self.metric.distance(&self.nodes[current].word, word);
            if distance == 0 {
                return true;
            }
            match self.nodes[current].children.get(&distance) {
                Some(&child) => current = child,
                None => return false,
            }
        }
    }

    /// Find every stored word within `max_distance` of `query`, sorted by
    /// ascending distance. Equal distances are ordered by word.
    pub fn search(&self, query: &str, max_distance: usize) -> Vec<MetricMatch> {
        self.search_with_stats(query, max_distance).0
    }

    /// Like [`search`](Self::search), also reporting how many nodes were
    /// compared against the query.
    pub fn search_with_stats(
        &self,
        query: &str,
        max_distance: usize,
    ) -> (Vec<MetricMatch>, SearchStats) {
        let mut matches = Vec::new();
        let mut stats = SearchStats::default();

        if self.nodes.is_empty() {
            return (matches, stats);
        }

        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            // Pruning needs the exact distance, so no cap here.
            let distance = self.metric.distance(&node.word, query);
            stats.visited += 1;

            if distance <= max_distance {
                matches.push(MetricMatch {
                    word: node.word.clone(),
                    distance,
                });
            }

            let low = distance.saturating_sub(max_distance);
            let high = distance.saturating_add(max_distance);
            stack.extend(node.children.range(low..=high).map(|(_, &child)| child));
        }

        matches.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| a.word.cmp(&b.word))
        });
        stats.matched = matches.len();

        trace!(
            "metric search for {:?} within {}: visited {} of {} nodes, {} matches",
            query,
            max_distance,
            stats.visited,
            self.nodes.len(),
            stats.matched
        );

        (matches, stats)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no words.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the stored words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.word.as_str())
    }
}

impl<D: EditDistance + Default> Default for MetricTree<D> {
    fn default() -> Self {
        Self::with_metric(D::default())
    }
}

impl<D: EditDistance, S: Into<String>> Extend<S> for MetricTree<D> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<D: EditDistance + Default, S: Into<String>> FromIterator<S> for MetricTree<D> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words_with_metric(iter, D::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Levenshtein;

    fn words_of(matches: &[MetricMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.word.as_str()).collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree = MetricTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.search("anything", 3).is_empty());
        assert!(!tree.contains("anything"));
    }

    #[test]
    fn test_insert_and_size() {
        let mut tree = MetricTree::new();
        assert!(tree.insert("cake"));
        assert!(tree.insert("cape"));
        assert!(tree.insert("lake"));
        assert!(!tree.insert("cake"));
        assert_eq!(tree.len(), 3);
        assert!(tree.contains("cape"));
        assert!(!tree.contains("cap"));
    }

    #[test]
    fn test_duplicate_insert_keeps_results() {
        let mut tree = MetricTree::from_words(["hello", "help", "world"]);
        let before = tree.search("helo", 1);
        tree.insert("help");
        tree.insert("hello");
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.search("helo", 1), before);
    }

    #[test]
    fn test_search_sorted_by_distance() {
        let tree = MetricTree::from_words(["book", "books", "cake", "boo", "cook", "cart"]);
        let results = tree.search("book", 1);

        assert_eq!(results[0], MetricMatch {
            word: "book".to_string(),
            distance: 0
        });
        assert_eq!(words_of(&results[1..]), vec!["boo", "books", "cook"]);
        assert!(results.iter().all(|m| m.distance <= 1));
    }

    #[test]
    fn test_end_to_end_example() {
        let tree = MetricTree::from_words(["brigadeiro", "beijinho", "brigadeirão"]);
        let results = tree.search("brigadero", 2);

        assert_eq!(results, vec![
            MetricMatch {
                word: "brigadeiro".to_string(),
                distance: 1
            },
            MetricMatch {
                word: "brigadeirão".to_string(),
                distance: 2
            },
        ]);
    }

    #[test]
    fn test_transposition_is_one_edit() {
        let tree = MetricTree::from_words(["search", "starch"]);
        assert_eq!(words_of(&tree.search("serach", 1)), vec!["search"]);

        let plain = MetricTree::from_words_with_metric(["search", "starch"], Levenshtein);
        assert!(plain.search("serach", 1).is_empty());
        assert_eq!(plain.search("serach", 2).len(), 1);
    }

    #[test]
    fn test_zero_distance_is_exact_lookup() {
        let tree = MetricTree::from_words(["alpha", "alps", "beta"]);
        assert_eq!(words_of(&tree.search("alps", 0)), vec!["alps"]);
        assert!(tree.search("alp", 0).is_empty());
    }

    #[test]
    fn test_collect_and_extend() {
        let mut tree: MetricTree = vec!["one", "two"].into_iter().collect();
        tree.extend(["three", "two"]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.words().collect::<Vec<_>>(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_search_stats_counts_visits() {
        let tree = MetricTree::from_words(["a", "b", "c"]);
        let (matches, stats) = tree.search_with_stats("a", 0);
        assert_eq!(stats.matched, matches.len());
        assert!(stats.visited >= 1 && stats.visited <= tree.len());
    }
}
