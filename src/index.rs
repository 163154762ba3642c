//! A vocabulary indexed by both a [`MetricTree`] and a [`PrefixTrie`].
//!
//! The two structures are independent indexes over the same words. Every
//! insertion goes to both; each query goes to whichever one fits it.
//!
//! ```
//! use fuzzmatch::index::VocabularyIndex;
//!
//! let mut index = VocabularyIndex::new();
//! index.extend(["brigadeiro", "beijinho", "brigadeirão"]);
//!
//! assert_eq!(index.similar("brigadero")[0].word, "brigadeiro");
//! assert_eq!(index.autocomplete("bei")[0].word, "beijinho");
//! ```

use std::sync::Arc;

use log::debug;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::bktree::{MetricMatch, MetricTree};
use crate::config::IndexConfig;
use crate::trie::{FuzzySuggestion, PrefixTrie, Suggestion};
use crate::vocabulary::WeightedWord;

/// Both indexes over one vocabulary, plus the query defaults.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    tree: MetricTree,
    trie: PrefixTrie,
    config: IndexConfig,
}

impl VocabularyIndex {
    /// Create an empty index with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        VocabularyIndex {
            tree: MetricTree::new(),
            trie: PrefixTrie::new(),
            config,
        }
    }

    /// Build an index from words or `(word, weight)` pairs.
    pub fn from_entries<I, E>(entries: I, config: IndexConfig) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedWord>,
    {
        let mut index = Self::with_config(config);
        index.extend(entries);
        debug!("indexed {} distinct words", index.len());
        index
    }

    /// Insert a word with weight 1 into both indexes.
    /// Returns `true` if the word is new.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        self.insert_weighted(word, 1)
    }

    /// Insert a word into both indexes, adding `weight` to its frequency.
    /// Returns `true` if the word is new.
    pub fn insert_weighted<S: Into<String>>(&mut self, word: S, weight: u64) -> bool {
        let word = word.into();
        self.tree.insert(word.as_str());
        self.trie.insert_weighted(word, weight)
    }

    /// Words within the configured distance of `query`.
    pub fn similar(&self, query: &str) -> Vec<MetricMatch> {
        self.tree.search(query, self.config.max_distance)
    }

    /// Completions of `prefix`, most frequent first, up to the configured limit.
    pub fn autocomplete(&self, prefix: &str) -> Vec<Suggestion> {
        self.trie.suggest(prefix, self.config.limit)
    }

    /// Typo-tolerant completions over the whole vocabulary.
    pub fn autocomplete_fuzzy(&self, query: &str) -> Vec<FuzzySuggestion> {
        self.trie
            .fuzzy_suggest(query, self.config.max_distance, self.config.limit)
    }

    /// The metric tree index.
    pub fn tree(&self) -> &MetricTree {
        &self.tree
    }

    /// The prefix trie index.
    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    /// The current query defaults.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Replace the query defaults.
    pub fn set_config(&mut self, config: IndexConfig) {
        self.config = config;
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl<E: Into<WeightedWord>> Extend<E> for VocabularyIndex {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            let WeightedWord { word, weight } = entry.into();
            self.insert_weighted(word, weight);
        }
    }
}

/// A [`VocabularyIndex`] that can be shared between threads.
///
/// Inserts take an exclusive lock; queries share a read lock, so concurrent
/// queries proceed in parallel while an insert waits for them to finish.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<VocabularyIndex>>,
}

impl SharedIndex {
    /// Wrap an existing index.
    pub fn new(index: VocabularyIndex) -> Self {
        SharedIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Insert a word with weight 1.
    pub fn insert<S: Into<String>>(&self, word: S) -> bool {
        self.inner.write().insert(word)
    }

    /// Insert a word with the given weight.
    pub fn insert_weighted<S: Into<String>>(&self, word: S, weight: u64) -> bool {
        self.inner.write().insert_weighted(word, weight)
    }

    /// See [`VocabularyIndex::similar`].
    pub fn similar(&self, query: &str) -> Vec<MetricMatch> {
        self.inner.read().similar(query)
    }

    /// See [`VocabularyIndex::autocomplete`].
    pub fn autocomplete(&self, prefix: &str) -> Vec<Suggestion> {
        self.inner.read().autocomplete(prefix)
    }

    /// See [`VocabularyIndex::autocomplete_fuzzy`].
    pub fn autocomplete_fuzzy(&self, query: &str) -> Vec<FuzzySuggestion> {
        self.inner.read().autocomplete_fuzzy(query)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Hold the read lock for several queries against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, VocabularyIndex> {
        self.inner.read()
    }
}
