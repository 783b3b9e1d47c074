//! TF-IDF scoring and ranking of candidate paragraphs.

use crate::analysis::Lemmatizer;
use crate::corpus::{ParagraphId, ParagraphTable};
use crate::error::{CallunaError, Result};
use crate::index::IndexSet;
use crate::index::postings::PostingsList;
use crate::query::wildcard;

/// Smoothed TF-IDF weight for one term in one paragraph:
/// `ln(1 + tf) * (ln((1 + n) / (1 + df)) + 1)`.
pub fn tfidf(tf: usize, df: usize, ndocs: usize) -> f64 {
    let tf_part = (1.0 + tf as f64).ln();
    let idf_part = ((1.0 + ndocs as f64) / (1.0 + df as f64)).ln() + 1.0;
    tf_part * idf_part
}

/// A query token prepared for scoring.
enum ScoreTerm {
    /// A lemmatized plain term.
    Plain(String),
    /// The vocabulary expansion of a wildcard token.
    Expanded(Vec<String>),
}

/// Score the candidate paragraphs against the raw query tokens and return
/// `(paragraph_id, score)` pairs sorted by descending score, ties broken by
/// ascending paragraph ID.
///
/// Tokens are stripped of quotes; plain tokens are lemmatized, wildcard
/// tokens expanded verbatim. A paragraph's score is the sum of the TF-IDF
/// contributions of every prepared term, where `tf` counts exact token
/// occurrences in the paragraph's tokenized text.
pub fn rank(
    candidates: &PostingsList,
    query_tokens: &[&str],
    table: &ParagraphTable,
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Result<Vec<(ParagraphId, f64)>> {
    let terms = prepare_terms(query_tokens, indexes, lemmatizer);
    let ndocs = table.len();

    let mut scored: Vec<(ParagraphId, f64)> = Vec::with_capacity(candidates.len());
    for id in candidates.iter() {
        let record = table.get(id).ok_or_else(|| {
            CallunaError::internal(format!("candidate paragraph out of range: {id}"))
        })?;
        let tokens: Vec<&str> = record.tokenized.split_whitespace().collect();

        let mut score = 0.0;
        for term in &terms {
            match term {
                ScoreTerm::Plain(lemma) => {
                    if let Some(postings) = indexes.inverted().postings(lemma) {
                        score += tfidf(count_token(&tokens, lemma), postings.len(), ndocs);
                    }
                }
                ScoreTerm::Expanded(matches) => {
                    for word in matches {
                        let postings = indexes.inverted().postings(word).ok_or_else(|| {
                            CallunaError::internal(format!(
                                "permuterm-matched term missing from the inverted index: {word}"
                            ))
                        })?;
                        score += tfidf(count_token(&tokens, word), postings.len(), ndocs);
                    }
                }
            }
        }
        scored.push((id, score));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    Ok(scored)
}

/// Strip quotes, lemmatize plain tokens, and expand wildcard tokens once
/// up front.
fn prepare_terms(
    query_tokens: &[&str],
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Vec<ScoreTerm> {
    let mut terms = Vec::with_capacity(query_tokens.len());
    for token in query_tokens {
        let stripped = token.replace('"', "");
        if stripped.is_empty() {
            continue;
        }
        if stripped.contains('*') {
            terms.push(ScoreTerm::Expanded(wildcard::expand(&stripped, indexes)));
        } else {
            terms.push(ScoreTerm::Plain(lemmatizer.lemma(&stripped)));
        }
    }
    terms
}

fn count_token(tokens: &[&str], term: &str) -> usize {
    tokens.iter().filter(|t| **t == term).count()
}
