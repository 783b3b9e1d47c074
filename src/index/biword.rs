//! Biword adjacency index for phrase queries.

use ahash::AHashMap;

use crate::corpus::{ParagraphId, ParagraphTable};
use crate::index::postings::PostingsList;

/// Maps each adjacent token pair `"w1 w2"` to the sorted paragraph IDs
/// containing that adjacency.
#[derive(Debug, Default)]
pub struct BiwordIndex {
    postings: AHashMap<String, PostingsList>,
}

impl BiwordIndex {
    /// Build the index from consecutive token pairs, in token order, per
    /// paragraph.
    pub fn build(table: &ParagraphTable) -> Self {
        let mut accumulator: AHashMap<String, Vec<ParagraphId>> = AHashMap::new();
        for (id, record) in table.iter() {
            let tokens: Vec<&str> = record.tokenized.split_whitespace().collect();
            for pair in tokens.windows(2) {
                accumulator
                    .entry(format!("{} {}", pair[0], pair[1]))
                    .or_default()
                    .push(id);
            }
        }

        let postings = accumulator
            .into_iter()
            .map(|(biword, ids)| (biword, PostingsList::from_unsorted(ids)))
            .collect();

        BiwordIndex { postings }
    }

    /// The postings list for a concrete biword.
    pub fn postings(&self, biword: &str) -> Option<&PostingsList> {
        self.postings.get(biword)
    }

    /// Number of distinct biwords.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no biwords.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
