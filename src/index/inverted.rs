//! The inverted index: vocabulary terms to paragraph postings.

use ahash::AHashMap;

use crate::analysis::is_punctuation_token;
use crate::corpus::{ParagraphId, ParagraphTable};
use crate::index::postings::PostingsList;

/// Maps each vocabulary term to the sorted paragraph IDs containing it.
///
/// The vocabulary is kept as a separate sorted vector; it is the only
/// iteration surface the index exposes, so build output stays byte-identical
/// across runs regardless of hash map layout.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, PostingsList>,
    vocabulary: Vec<String>,
}

impl InvertedIndex {
    /// Build the index in one pass over the table.
    pub fn build(table: &ParagraphTable) -> Self {
        let mut accumulator: AHashMap<String, Vec<ParagraphId>> = AHashMap::new();
        for (id, record) in table.iter() {
            for term in paragraph_terms(&record.tokenized) {
                accumulator.entry(term.to_string()).or_default().push(id);
            }
        }

        let mut vocabulary: Vec<String> = accumulator.keys().cloned().collect();
        vocabulary.sort_unstable();

        let postings = accumulator
            .into_iter()
            .map(|(term, ids)| (term, PostingsList::from_unsorted(ids)))
            .collect();

        InvertedIndex {
            postings,
            vocabulary,
        }
    }

    /// The postings list for `term`, if the term is in the vocabulary.
    pub fn postings(&self, term: &str) -> Option<&PostingsList> {
        self.postings.get(term)
    }

    /// Whether `term` is in the vocabulary.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Document frequency of `term`: the length of its postings list, or 0
    /// for unknown terms.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, PostingsList::len)
    }

    /// The vocabulary, sorted ascending.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }
}

/// The sorted unique token set of one paragraph's tokenized text, with
/// punctuation-only tokens dropped.
pub(crate) fn paragraph_terms(tokenized: &str) -> Vec<&str> {
    let mut terms: Vec<&str> = tokenized
        .split_whitespace()
        .filter(|token| !is_punctuation_token(token))
        .collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}
