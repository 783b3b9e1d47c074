use serde::{Deserialize, Serialize};

use crate::corpus::ParagraphId;

/// A search request against the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The raw query string. Lowercased before processing.
    pub query: String,

    /// Resolve the query as an exact phrase via the biword index.
    pub phrase: bool,

    /// Rank hits by TF-IDF. Unranked hits come back in paragraph order
    /// with no scores.
    pub ranked: bool,

    /// Maximum number of hits to return.
    pub limit: Option<usize>,

    /// Retry once with a spell-corrected query when nothing matches.
    pub spell_check: bool,
}

impl SearchRequest {
    /// Create a request with default settings: ranked, non-phrase, no
    /// limit, no spell correction.
    pub fn new<S: Into<String>>(query: S) -> Self {
        SearchRequest {
            query: query.into(),
            phrase: false,
            ranked: true,
            limit: None,
            spell_check: false,
        }
    }

    /// Start building a request for `query`.
    pub fn builder<S: Into<String>>(query: S) -> SearchRequestBuilder {
        SearchRequestBuilder {
            request: SearchRequest::new(query),
        }
    }
}

/// Builder for [`SearchRequest`].
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Set phrase mode.
    pub fn phrase(mut self, phrase: bool) -> Self {
        self.request.phrase = phrase;
        self
    }

    /// Set whether hits are ranked by TF-IDF.
    pub fn ranked(mut self, ranked: bool) -> Self {
        self.request.ranked = ranked;
        self
    }

    /// Limit the number of returned hits.
    pub fn limit(mut self, limit: usize) -> Self {
        self.request.limit = Some(limit);
        self
    }

    /// Enable the zero-result spell-correction retry.
    pub fn spell_check(mut self, spell_check: bool) -> Self {
        self.request.spell_check = spell_check;
        self
    }

    /// Finish building.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// One matching paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// ID of the matching paragraph.
    pub paragraph_id: ParagraphId,
    /// TF-IDF score; `None` for unranked searches.
    pub score: Option<f64>,
}

/// The outcome of a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching paragraphs, ranked or in paragraph order.
    pub hits: Vec<SearchHit>,
    /// The rewritten query, when a spell-correction retry produced the
    /// hits.
    pub corrected_query: Option<String>,
}

impl SearchResponse {
    /// Whether the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::new("red car");
        assert_eq!(request.query, "red car");
        assert!(!request.phrase);
        assert!(request.ranked);
        assert_eq!(request.limit, None);
        assert!(!request.spell_check);
    }

    #[test]
    fn test_builder_sets_fields() {
        let request = SearchRequest::builder("red car")
            .phrase(true)
            .ranked(false)
            .limit(5)
            .spell_check(true)
            .build();

        assert!(request.phrase);
        assert!(!request.ranked);
        assert_eq!(request.limit, Some(5));
        assert!(request.spell_check);
    }
}
