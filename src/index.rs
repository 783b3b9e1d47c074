//! Index construction: the immutable four-index snapshot over a corpus.

pub mod biword;
pub mod inverted;
pub mod permuterm;
pub mod postings;

use log::debug;

use crate::corpus::ParagraphTable;

use self::biword::BiwordIndex;
use self::inverted::InvertedIndex;
use self::permuterm::PermutermIndex;

/// The four in-memory indexes built over a paragraph table.
///
/// Construction is a deterministic batch operation that runs to completion
/// before any query is served. Once returned, the set is read-only;
/// concurrent readers need no synchronization. Rebuilding produces a fresh
/// snapshot rather than mutating in place.
#[derive(Debug)]
pub struct IndexSet {
    inverted: InvertedIndex,
    permuterm: PermutermIndex,
    reverse_permuterm: PermutermIndex,
    biwords: BiwordIndex,
}

impl IndexSet {
    /// Build all four indexes in one batch pass over the table.
    pub fn build(table: &ParagraphTable) -> Self {
        let inverted = InvertedIndex::build(table);
        let permuterm = PermutermIndex::build(inverted.vocabulary());
        let reverse_permuterm = PermutermIndex::build_reversed(inverted.vocabulary());
        let biwords = BiwordIndex::build(table);

        debug!(
            "index build complete: {} paragraphs, {} terms, {} permuterm keys, {} biwords",
            table.len(),
            inverted.term_count(),
            permuterm.key_count(),
            biwords.len()
        );

        IndexSet {
            inverted,
            permuterm,
            reverse_permuterm,
            biwords,
        }
    }

    /// The inverted index.
    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    /// The forward permuterm index, for `prefix*` patterns.
    pub fn permuterm(&self) -> &PermutermIndex {
        &self.permuterm
    }

    /// The reverse permuterm index, for `*suffix` patterns.
    pub fn reverse_permuterm(&self) -> &PermutermIndex {
        &self.reverse_permuterm
    }

    /// The biword adjacency index.
    pub fn biwords(&self) -> &BiwordIndex {
        &self.biwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ParagraphRecord;

    #[test]
    fn test_build_over_empty_corpus() {
        let indexes = IndexSet::build(&ParagraphTable::new());
        assert_eq!(indexes.inverted().term_count(), 0);
        assert_eq!(indexes.permuterm().key_count(), 0);
        assert_eq!(indexes.reverse_permuterm().key_count(), 0);
        assert!(indexes.biwords().is_empty());
    }

    #[test]
    fn test_build_wires_all_indexes() {
        let table = ParagraphTable::from_records(vec![ParagraphRecord {
            document_name: "doc".to_string(),
            page_number: 0,
            paragraph_number: 0,
            text: "Red car.".to_string(),
            tokenized: "red car".to_string(),
        }]);
        let indexes = IndexSet::build(&table);

        assert_eq!(indexes.inverted().vocabulary(), &["car", "red"]);
        assert_eq!(indexes.permuterm().terms("re").unwrap(), &["red"]);
        assert_eq!(indexes.reverse_permuterm().terms("rac").unwrap(), &["car"]);
        assert_eq!(indexes.biwords().postings("red car").unwrap().ids(), &[0]);
    }
}
