//! Aggregation of extracted tokens
//!
//! Two mutually exclusive reductions over the match list:
//! - Wordlist: unique, non-empty, sorted by code point
//! - Frequency table: non-empty tokens with their tallies, in first-seen order

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};

/// Unique non-empty tokens sorted ascending
pub fn build_wordlist<'t>(matches: &[&'t str]) -> Vec<&'t str> {
    let mut seen: HashSet<&str, RandomState> = HashSet::with_hasher(RandomState::new());

    let mut words: Vec<&'t str> = matches
        .iter()
        .copied()
        .filter(|word| !word.is_empty() && seen.insert(*word))
        .collect();

    // Byte order of UTF-8 is code point order
    words.sort_unstable();
    words
}

/// Tally non-empty tokens
pub fn count_words<'t>(matches: &[&'t str]) -> FrequencyTable<'t> {
    let mut table = FrequencyTable::new();
    for word in matches.iter().copied().filter(|word| !word.is_empty()) {
        table.add(word);
    }
    table
}

/// Occurrence counts keyed by token, iterated in first-seen order
#[derive(Debug, Default)]
pub struct FrequencyTable<'t> {
    index: HashMap<&'t str, usize, RandomState>,
    entries: Vec<(&'t str, u64)>,
}

impl<'t> FrequencyTable<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`
    pub fn add(&mut self, word: &'t str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word, self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all tallies
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'t str, u64)> + '_ {
        self.entries.iter().copied()
    }
}
