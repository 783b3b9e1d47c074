pub mod config;
pub mod search;

use log::{debug, info};

use crate::analysis::{Inflector, Lemmatizer};
use crate::corpus::{ParagraphId, ParagraphRecord, ParagraphTable};
use crate::error::Result;
use crate::index::IndexSet;
use crate::index::postings::PostingsList;
use crate::query;
use crate::scoring;
use crate::spelling::{corrector, suggest};

use self::config::EngineConfig;
use self::search::{SearchHit, SearchRequest, SearchResponse};

/// A paragraph-level full-text search engine.
///
/// The engine is a facade over the paragraph table and its four immutable
/// indexes. Construction builds every index as one batch operation; after
/// that the engine is read-only and safe to share across threads without
/// synchronization. Re-indexing means building a fresh engine.
pub struct SearchEngine {
    table: ParagraphTable,
    indexes: IndexSet,
    lemmatizer: Box<dyn Lemmatizer>,
    inflector: Box<dyn Inflector>,
    config: EngineConfig,
}

impl SearchEngine {
    /// Build an engine over `table`, constructing all indexes up front.
    ///
    /// An empty table is legal; every query then resolves to an empty
    /// result.
    pub fn new(
        table: ParagraphTable,
        lemmatizer: Box<dyn Lemmatizer>,
        inflector: Box<dyn Inflector>,
        config: EngineConfig,
    ) -> Self {
        let indexes = IndexSet::build(&table);
        info!(
            "engine ready: {} paragraphs, {} vocabulary terms",
            table.len(),
            indexes.inverted().term_count()
        );
        SearchEngine {
            table,
            indexes,
            lemmatizer,
            inflector,
            config,
        }
    }

    /// The paragraph table this engine serves.
    pub fn table(&self) -> &ParagraphTable {
        &self.table
    }

    /// The index snapshot this engine serves.
    pub fn indexes(&self) -> &IndexSet {
        &self.indexes
    }

    /// Look up one paragraph by ID.
    pub fn paragraph(&self, id: ParagraphId) -> Option<&ParagraphRecord> {
        self.table.get(id)
    }

    /// Execute a search request.
    ///
    /// The query is lowercased, resolved to candidate paragraphs by boolean
    /// or phrase retrieval, optionally retried once through spell
    /// correction when nothing matched, then ranked and truncated.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let mut query_string = request.query.to_lowercase();
        let mut corrected_query = None;

        let mut candidates = self.filter(&query_string, request.phrase)?;
        if candidates.is_empty() && request.spell_check {
            let corrected = corrector::correct_query(
                &query_string,
                self.indexes.inverted(),
                self.config.transpositions,
            );
            if corrected != query_string {
                debug!("no direct match for {query_string:?}, retrying as {corrected:?}");
                candidates = self.filter(&corrected, request.phrase)?;
                query_string = corrected.clone();
                corrected_query = Some(corrected);
            }
        }

        let mut hits: Vec<SearchHit> = if request.ranked {
            let tokens: Vec<&str> = query_string.split_whitespace().collect();
            scoring::rank(
                &candidates,
                &tokens,
                &self.table,
                &self.indexes,
                self.lemmatizer.as_ref(),
            )?
            .into_iter()
            .map(|(paragraph_id, score)| SearchHit {
                paragraph_id,
                score: Some(score),
            })
            .collect()
        } else {
            candidates
                .iter()
                .map(|paragraph_id| SearchHit {
                    paragraph_id,
                    score: None,
                })
                .collect()
        };

        if let Some(limit) = request.limit {
            hits.truncate(limit);
        }

        Ok(SearchResponse {
            hits,
            corrected_query,
        })
    }

    /// Complete the last token of `query` against the indexed vocabulary,
    /// returning up to `limit` full query suggestions.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        suggest::autocomplete(
            &query.to_lowercase(),
            self.indexes.inverted(),
            self.inflector.as_ref(),
            self.config.transpositions,
            limit,
        )
    }

    fn filter(&self, query: &str, phrase: bool) -> Result<PostingsList> {
        query::resolve(query, phrase, &self.indexes, self.lemmatizer.as_ref())
    }
}
