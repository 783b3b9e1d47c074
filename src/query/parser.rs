//! Query string parsing and validation.

use crate::error::{CallunaError, Result};

/// One parsed sub-token of a boolean query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTerm {
    /// A plain term, lemmatized before index lookup.
    Plain(String),
    /// A term containing exactly one `*`, resolved through the permuterm
    /// indexes. Never lemmatized.
    Wildcard(String),
}

impl QueryTerm {
    fn classify(token: &str) -> Result<QueryTerm> {
        match token.matches('*').count() {
            0 => Ok(QueryTerm::Plain(token.to_string())),
            1 => Ok(QueryTerm::Wildcard(token.to_string())),
            _ => Err(CallunaError::invalid_query(format!(
                "more than one wildcard in sub-token: {token}"
            ))),
        }
    }
}

/// A boolean query split into AND-terms and OR-terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Sub-tokens wrapped in double quotes; every one must match.
    pub and_terms: Vec<QueryTerm>,
    /// Bare sub-tokens; any may match.
    pub or_terms: Vec<QueryTerm>,
}

/// Parse a lowercased query string in non-phrase mode.
///
/// Sub-tokens are separated by whitespace; a sub-token wrapped in `"..."`
/// becomes an AND-term, anything else an OR-term. A sub-token with more
/// than one `*` is rejected.
pub fn parse_boolean(query: &str) -> Result<ParsedQuery> {
    let mut parsed = ParsedQuery::default();
    for token in query.split_whitespace() {
        match quoted_inner(token) {
            Some(inner) => parsed.and_terms.push(QueryTerm::classify(inner)?),
            None => parsed.or_terms.push(QueryTerm::classify(token)?),
        }
    }
    Ok(parsed)
}

/// Parse a lowercased query string in phrase mode: strip every `"` and
/// split on whitespace. Wildcard validation applies to each token.
pub fn parse_phrase(query: &str) -> Result<Vec<String>> {
    let stripped = query.replace('"', "");
    let mut tokens = Vec::new();
    for token in stripped.split_whitespace() {
        if token.matches('*').count() > 1 {
            return Err(CallunaError::invalid_query(format!(
                "more than one wildcard in sub-token: {token}"
            )));
        }
        tokens.push(token.to_string());
    }
    Ok(tokens)
}

/// The content of a `"..."` wrapped token, if it is one.
fn quoted_inner(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}
