//! Boolean combination of term postings.

use crate::analysis::Lemmatizer;
use crate::error::Result;
use crate::index::IndexSet;
use crate::index::postings::PostingsList;
use crate::query::parser::{ParsedQuery, QueryTerm};
use crate::query::wildcard;

/// Resolve a parsed boolean query to a sorted candidate list.
///
/// AND-terms alone intersect; OR-terms alone union; when both are present
/// the AND intersection is further filtered by the OR union. An unknown
/// plain term contributes an empty postings list, so an AND-term that
/// matches nothing empties the whole result.
pub fn resolve(
    parsed: &ParsedQuery,
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Result<PostingsList> {
    match (parsed.and_terms.is_empty(), parsed.or_terms.is_empty()) {
        (true, true) => Ok(PostingsList::new()),
        (false, true) => intersection_of(&parsed.and_terms, indexes, lemmatizer),
        (true, false) => union_of(&parsed.or_terms, indexes, lemmatizer),
        (false, false) => {
            let required = intersection_of(&parsed.and_terms, indexes, lemmatizer)?;
            let optional = union_of(&parsed.or_terms, indexes, lemmatizer)?;
            Ok(required.intersect(&optional))
        }
    }
}

/// Postings for one parsed term. Plain terms are lemmatized first; unknown
/// terms resolve to an empty list rather than an error.
fn term_postings(
    term: &QueryTerm,
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Result<PostingsList> {
    match term {
        QueryTerm::Plain(token) => {
            let lemma = lemmatizer.lemma(token);
            Ok(indexes
                .inverted()
                .postings(&lemma)
                .cloned()
                .unwrap_or_default())
        }
        QueryTerm::Wildcard(pattern) => wildcard::resolve_postings(pattern, indexes),
    }
}

fn union_of(
    terms: &[QueryTerm],
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Result<PostingsList> {
    let mut combined = PostingsList::new();
    for term in terms {
        combined = combined.union(&term_postings(term, indexes, lemmatizer)?);
    }
    Ok(combined)
}

fn intersection_of(
    terms: &[QueryTerm],
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Result<PostingsList> {
    let mut combined: Option<PostingsList> = None;
    for term in terms {
        let postings = term_postings(term, indexes, lemmatizer)?;
        combined = Some(match combined {
            Some(acc) => acc.intersect(&postings),
            None => postings,
        });
        if combined.as_ref().is_some_and(PostingsList::is_empty) {
            break;
        }
    }
    Ok(combined.unwrap_or_default())
}
