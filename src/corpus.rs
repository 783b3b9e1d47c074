//! The paragraph table: the corpus as consumed by the index builders.
//!
//! Paragraph records are produced by an external tokenizer pipeline and
//! arrive as a columnar CSV table with one row per paragraph. The table is
//! the sole owner of record data; every index refers to paragraphs by ID
//! only.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Dense 0-based identifier of a paragraph: its row position in the table.
pub type ParagraphId = u32;

/// A single indexed paragraph.
///
/// Records are immutable once pushed into a [`ParagraphTable`]. The
/// `tokenized` column holds the space-joined sequence of normalized tokens
/// (already lemmatized and lowercased by the external tokenizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Name of the source document.
    pub document_name: String,
    /// 0-based page number within the document.
    pub page_number: u32,
    /// 0-based paragraph number within the page.
    pub paragraph_number: u32,
    /// Raw paragraph text.
    pub text: String,
    /// Space-joined normalized tokens.
    pub tokenized: String,
}

/// An immutable, densely indexed collection of paragraph records.
#[derive(Debug, Clone, Default)]
pub struct ParagraphTable {
    records: Vec<ParagraphRecord>,
}

impl ParagraphTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from pre-built records. IDs are assigned by position.
    pub fn from_records(records: Vec<ParagraphRecord>) -> Self {
        ParagraphTable { records }
    }

    /// Load a tokenized paragraph table from a single CSV file.
    ///
    /// Expected columns: `document_name`, `page_number`, `paragraph_number`,
    /// `text`, `tokenized`.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_csvs([path])
    }

    /// Load and concatenate several tokenized CSV files.
    ///
    /// Paragraph IDs are re-assigned densely across the concatenation, in
    /// file order then row order.
    pub fn load_csvs<P, I>(paths: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut table = ParagraphTable::new();
        for path in paths {
            let mut reader = csv::Reader::from_path(path.as_ref())?;
            for row in reader.deserialize() {
                let record: ParagraphRecord = row?;
                table.push(record);
            }
        }
        Ok(table)
    }

    /// Append a record, assigning it the next dense ID.
    pub fn push(&mut self, record: ParagraphRecord) {
        self.records.push(record);
    }

    /// Number of paragraphs in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a paragraph by ID.
    pub fn get(&self, id: ParagraphId) -> Option<&ParagraphRecord> {
        self.records.get(id as usize)
    }

    /// Iterate over `(paragraph_id, record)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (ParagraphId, &ParagraphRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(id, record)| (id as ParagraphId, record))
    }
}
