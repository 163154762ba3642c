//! Prefix trie with frequency-ranked autocomplete and fuzzy suggestions.
//!
//! Every edge is one `char`. A node that ends an inserted word carries the
//! word and its accumulated frequency. Reinserting a word adds to its
//! frequency rather than resetting it, so popular words rank higher.
//!
//! [`PrefixTrie::fuzzy_suggest`] deliberately scans the whole vocabulary:
//! the trie has no way to prune by edit distance. For large vocabularies use
//! [`MetricTree`](crate::bktree::MetricTree) for similarity search instead.

use ahash::AHashMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::{DamerauLevenshtein, EditDistance};
use crate::vocabulary::WeightedWord;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Terminal {
    word: String,
    frequency: u64,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: AHashMap<char, NodeId>,
    /// Present iff a word ends here.
    terminal: Option<Terminal>,
}

/// A prefix completion returned by [`PrefixTrie::suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The completed word.
    pub word: String,
    /// Accumulated insertion weight.
    pub frequency: u64,
}

/// A typo-tolerant match returned by [`PrefixTrie::fuzzy_suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzySuggestion {
    /// The stored word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
    /// Accumulated insertion weight.
    pub frequency: u64,
}

/// A character trie over complete words.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    size: usize,
}

impl PrefixTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        PrefixTrie {
            nodes: vec![TrieNode::default()],
            size: 0,
        }
    }

    /// Build a trie from plain words, each with weight 1.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(words.into_iter().map(|word| WeightedWord::new(word, 1)))
    }

    /// Build a trie from words or `(word, frequency)` pairs.
    ///
    /// ```
    /// use fuzzmatch::trie::PrefixTrie;
    ///
    /// let trie = PrefixTrie::from_entries([("cake", 5), ("candy", 2)]);
    /// assert_eq!(trie.frequency("cake"), Some(5));
    /// ```
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedWord>,
    {
        let mut trie = PrefixTrie::new();
        trie.extend(entries);
        debug!(
            "built prefix trie with {} words over {} nodes",
            trie.size,
            trie.nodes.len()
        );
        trie
    }

    /// Insert a word with weight 1. Returns `true` if the word is new.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        self.insert_weighted(word, 1)
    }

    /// Insert a word, adding `weight` to its frequency. A weight of 0 counts
    /// as 1 so every stored word has a frequency of at least 1.
    /// Returns `true` if the word is new.
    pub fn insert_weighted<S: Into<String>>(&mut self, word: S, weight: u64) -> bool {
        let word = word.into();
        let weight = weight.max(1);

        let mut current = ROOT;
        for ch in word.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if let Some(terminal) = node.terminal.as_mut() {
            terminal.frequency = terminal.frequency.saturating_add(weight);
            return false;
        }

        node.terminal = Some(Terminal {
            word,
            frequency: weight,
        });
        self.size += 1;
        true
    }

    fn find_node(&self, prefix: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in prefix.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }

    /// Check whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|id| self.nodes[id].terminal.is_some())
    }

    /// Check whether any inserted word starts with `prefix`.
    /// The empty prefix always exists.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Accumulated frequency of `word`, if present.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        let id = self.find_node(word)?;
        self.nodes[id].terminal.as_ref().map(|t| t.frequency)
    }

    fn terminals_under(&self, start: NodeId) -> Vec<&Terminal> {
        let mut found = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(terminal) = &node.terminal {
                found.push(terminal);
            }
            stack.extend(node.children.values().copied());
        }

        found
    }

    /// Complete `prefix` with up to `limit` stored words, most frequent first.
    /// Equal frequencies are ordered by word.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(start) = self.find_node(prefix) else {
            return Vec::new();
        };

        let mut suggestions: Vec<Suggestion> = self
            .terminals_under(start)
            .into_iter()
            .map(|t| Suggestion {
                word: t.word.clone(),
                frequency: t.frequency,
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        suggestions.truncate(limit);
        suggestions
    }

    /// Find up to `limit` stored words within `max_distance` of `query`
    /// using Damerau-Levenshtein distance.
    pub fn fuzzy_suggest(
        &self,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Vec<FuzzySuggestion> {
        self.fuzzy_suggest_with(query, max_distance, limit, &DamerauLevenshtein)
    }

    /// Find up to `limit` stored words within `max_distance` of `query`
    /// using the given metric.
    ///
    /// Every stored word is compared, independent of any shared prefix.
    /// Results are ordered by ascending distance, then descending frequency,
    /// then word.
    pub fn fuzzy_suggest_with<M>(
        &self,
        query: &str,
        max_distance: usize,
        limit: usize,
        metric: &M,
    ) -> Vec<FuzzySuggestion>
    where
        M: EditDistance + ?Sized,
    {
        if limit == 0 {
            return Vec::new();
        }

        let mut results: Vec<FuzzySuggestion> = self
            .terminals_under(ROOT)
            .into_iter()
            .filter_map(|t| {
                let distance = metric.distance_bounded(query, &t.word, max_distance);
                (distance <= max_distance).then(|| FuzzySuggestion {
                    word: t.word.clone(),
                    distance,
                    frequency: t.frequency,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word))
        });

        trace!(
            "fuzzy suggest for {:?} within {}: {} of {} words matched",
            query,
            max_distance,
            results.len(),
            self.size
        );

        results.truncate(limit);
        results
    }

    /// Iterate over every stored word with its frequency, in no particular
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.terminal.as_ref())
            .map(|t| (t.word.as_str(), t.frequency))
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Into<WeightedWord>> Extend<E> for PrefixTrie {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            let WeightedWord { word, weight } = entry.into();
            self.insert_weighted(word, weight);
        }
    }
}

impl<E: Into<WeightedWord>> FromIterator<E> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Levenshtein;

    fn words_of(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_empty_trie() {
        let trie = PrefixTrie::new();
        assert!(trie.is_empty());
        assert!(trie.has_prefix(""));
        assert!(!trie.contains(""));
        assert!(trie.suggest("", 10).is_empty());
        assert!(trie.fuzzy_suggest("cake", 2, 10).is_empty());
    }

    #[test]
    fn test_contains_and_prefix() {
        let trie = PrefixTrie::from_words(["cake", "candy", "car"]);

        assert!(trie.contains("cake"));
        assert!(trie.contains("car"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cakes"));

        assert!(trie.has_prefix("ca"));
        assert!(trie.has_prefix("cand"));
        assert!(trie.has_prefix("cake"));
        assert!(!trie.has_prefix("cb"));
    }

    #[test]
    fn test_prefix_inserted_as_word() {
        let trie = PrefixTrie::from_words(["car", "cart"]);
        assert!(trie.contains("car"));
        assert_eq!(words_of(&trie.suggest("car", 10)), vec!["car", "cart"]);
    }

    #[test]
    fn test_size_counts_distinct_words() {
        let mut trie = PrefixTrie::new();
        assert!(trie.insert("cake"));
        assert!(!trie.insert("cake"));
        assert!(trie.insert("cakes"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_frequency_accumulates() {
        let mut trie = PrefixTrie::new();
        trie.insert("cake");
        trie.insert("cake");
        trie.insert("cake");
        trie.insert("candy");

        assert_eq!(trie.frequency("cake"), Some(3));
        assert_eq!(trie.frequency("candy"), Some(1));
        assert_eq!(trie.frequency("ca"), None);

        let suggestions = trie.suggest("ca", 10);
        assert_eq!(suggestions[0], Suggestion {
            word: "cake".to_string(),
            frequency: 3
        });
        assert_eq!(suggestions[1].word, "candy");
    }

    #[test]
    fn test_zero_weight_counts_as_one() {
        let mut trie = PrefixTrie::new();
        trie.insert_weighted("cake", 0);
        assert_eq!(trie.frequency("cake"), Some(1));
        trie.insert_weighted("cake", 4);
        assert_eq!(trie.frequency("cake"), Some(5));
    }

    #[test]
    fn test_suggest_limit_and_order() {
        let trie =
            PrefixTrie::from_entries([("pie", 1), ("pizza", 9), ("pickle", 4), ("pita", 4)]);

        let top = trie.suggest("pi", 3);
        assert_eq!(words_of(&top), vec!["pizza", "pickle", "pita"]);
        assert!(trie.suggest("pi", 0).is_empty());
        assert_eq!(trie.suggest("pi", 100).len(), 4);
        assert!(trie.suggest("pz", 10).is_empty());
    }

    #[test]
    fn test_end_to_end_suggest() {
        let trie = PrefixTrie::from_words(["brigadeiro", "beijinho", "brigadeirão"]);
        let found = trie.suggest("bri", 10);
        let mut words = words_of(&found);
        words.sort();
        assert_eq!(words, vec!["brigadeiro", "brigadeirão"]);
    }

    #[test]
    fn test_fuzzy_suggest_ranking() {
        let trie = PrefixTrie::from_entries([
            ("cake", 1),
            ("cape", 7),
            ("lake", 3),
            ("cookie", 10),
        ]);

        let results = trie.fuzzy_suggest("cake", 1, 10);
        let ranked: Vec<(&str, usize)> = results
            .iter()
            .map(|r| (r.word.as_str(), r.distance))
            .collect();
        assert_eq!(ranked, vec![("cake", 0), ("cape", 1), ("lake", 1)]);

        assert_eq!(trie.fuzzy_suggest("cake", 1, 2).len(), 2);
        assert!(trie.fuzzy_suggest("cake", 1, 0).is_empty());
    }

    #[test]
    fn test_fuzzy_suggest_ignores_prefix() {
        let trie = PrefixTrie::from_words(["brigadeiro", "abrigadeiro"]);
        let results = trie.fuzzy_suggest("brigadero", 2, 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].word, "brigadeiro");
    }

    #[test]
    fn test_fuzzy_suggest_with_metric() {
        let trie = PrefixTrie::from_words(["teh", "ten"]);
        let damerau = trie.fuzzy_suggest("the", 1, 10);
        assert_eq!(damerau.len(), 1);
        assert_eq!(damerau[0].word, "teh");

        let plain = trie.fuzzy_suggest_with("the", 1, 10, &Levenshtein);
        assert!(plain.is_empty());
    }

    #[test]
    fn test_unicode_edges() {
        let trie = PrefixTrie::from_words(["ação", "açaí"]);
        assert!(trie.has_prefix("aç"));
        assert!(trie.contains("açaí"));
        assert_eq!(trie.suggest("açã", 10).len(), 1);
    }

    #[test]
    fn test_entries_and_collect() {
        let mut trie: PrefixTrie = vec!["one", "two"].into_iter().collect();
        trie.extend([("two", 2)]);
        let mut entries: Vec<(&str, u64)> = trie.entries().collect();
        entries.sort();
        assert_eq!(entries, vec![("one", 1), ("two", 3)]);
    }
}
