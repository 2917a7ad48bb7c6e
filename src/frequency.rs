//! Token frequency statistics.
//!
//! [`calculate_frequencies`] counts every distinct token of a sequence and
//! returns a [`FrequencyTable`] ranked by descending count. Tokens with equal
//! counts keep the order in which they were first encountered, so rankings
//! (and the top-N lists built on them) are reproducible.
//!
//! # Examples
//!
//! ```
//! use concordancer::analysis::tokenizer::tokenize;
//! use concordancer::frequency::{calculate_frequencies, get_top_n_words};
//!
//! let tokens = tokenize("weather sunny man happy and dog happy");
//! let table = calculate_frequencies(&tokens);
//!
//! assert_eq!(table.get("happy"), Some(2));
//! assert_eq!(table.total(), tokens.len());
//! assert_eq!(get_top_n_words(&table, 1), vec!["happy"]);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// A distinct token together with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    /// The token text.
    pub term: Token,
    /// How many times the token occurs.
    pub count: usize,
}

impl TermFrequency {
    /// Create a new term frequency entry.
    pub fn new<S: Into<Token>>(term: S, count: usize) -> Self {
        TermFrequency {
            term: term.into(),
            count,
        }
    }
}

/// Occurrence counts per distinct token, ranked highest count first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    /// Entries in rank order.
    entries: Vec<TermFrequency>,
    /// Term to its index in `entries`.
    #[serde(skip)]
    index: AHashMap<Token, usize>,
}

impl FrequencyTable {
    /// Create a new empty frequency table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the tokens of `tokens` and rank them.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        // First pass keeps first-encounter order for the stable tie-break.
        let mut slots: AHashMap<&str, usize> = AHashMap::new();
        let mut entries: Vec<TermFrequency> = Vec::new();

        for token in tokens {
            match slots.get(token.as_str()) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    slots.insert(token.as_str(), entries.len());
                    entries.push(TermFrequency::new(token.clone(), 1));
                }
            }
        }

        Self::from_entries(entries)
    }

    /// Build a table from entries given in first-encounter order.
    ///
    /// Entries are ranked by descending count with a stable sort; entries for
    /// a term already seen are merged into the first one.
    pub fn from_entries(entries: Vec<TermFrequency>) -> Self {
        let mut merged: Vec<TermFrequency> = Vec::with_capacity(entries.len());
        let mut slots: AHashMap<Token, usize> = AHashMap::with_capacity(entries.len());

        for entry in entries {
            match slots.get(&entry.term) {
                Some(&slot) => merged[slot].count += entry.count,
                None => {
                    slots.insert(entry.term.clone(), merged.len());
                    merged.push(entry);
                }
            }
        }

        merged.sort_by(|a, b| b.count.cmp(&a.count));

        let index = merged
            .iter()
            .enumerate()
            .map(|(rank, entry)| (entry.term.clone(), rank))
            .collect();

        FrequencyTable {
            entries: merged,
            index,
        }
    }

    /// Get the count of a token, if it occurs at all.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).map(|&rank| self.entries[rank].count)
    }

    /// Check whether a token occurs in the table.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Get the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Iterate over the entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, TermFrequency> {
        self.entries.iter()
    }

    /// Get the ranked entries.
    pub fn entries(&self) -> &[TermFrequency] {
        &self.entries
    }

    /// The `top_n` highest-ranked entries.
    pub fn top(&self, top_n: usize) -> &[TermFrequency] {
        &self.entries[..top_n.min(self.entries.len())]
    }

    /// Convert the table into ranked `(term, count)` pairs.
    pub fn into_vec(self) -> Vec<(Token, usize)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.term, entry.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a TermFrequency;
    type IntoIter = std::slice::Iter<'a, TermFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count occurrences of each distinct token, ranked highest count first.
pub fn calculate_frequencies(tokens: &[Token]) -> FrequencyTable {
    FrequencyTable::from_tokens(tokens)
}

/// Return the `top_n` most frequent tokens.
///
/// The result has `min(top_n, freq_table.len())` entries; `top_n == 0`
/// yields an empty list.
pub fn get_top_n_words(freq_table: &FrequencyTable, top_n: usize) -> Vec<Token> {
    freq_table
        .top(top_n)
        .iter()
        .map(|entry| entry.term.clone())
        .collect()
}
