//! Prefix autocomplete over the indexed vocabulary.

use crate::analysis::Inflector;
use crate::index::inverted::InvertedIndex;
use crate::spelling::corrector::edit_distance;

/// Complete the last whitespace-delimited token of `query` against the
/// vocabulary.
///
/// Prefix matches are ordered by edit distance to the token, then by
/// descending document frequency (the sort is stable over ascending
/// vocabulary order). Each match is expanded to its inflected surface
/// forms, deduplicated preserving order, truncated to `limit`, and
/// re-joined to the untouched query prefix.
pub fn autocomplete(
    query: &str,
    inverted: &InvertedIndex,
    inflector: &dyn Inflector,
    transpositions: bool,
    limit: usize,
) -> Vec<String> {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    let Some(last) = tokens.last().copied() else {
        return Vec::new();
    };

    let mut matches: Vec<(usize, usize, &String)> = Vec::new();
    for term in inverted.vocabulary() {
        if term.starts_with(last) {
            matches.push((
                edit_distance(last, term, transpositions),
                inverted.document_frequency(term),
                term,
            ));
        }
    }
    matches.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut completions: Vec<String> = Vec::new();
    for (_, _, term) in &matches {
        for form in inflector.inflect_all(term) {
            if !completions.contains(&form) {
                completions.push(form);
            }
        }
    }
    completions.truncate(limit);

    let prefix = tokens[..tokens.len() - 1].join(" ");
    completions
        .into_iter()
        .map(|word| {
            if prefix.is_empty() {
                word
            } else {
                format!("{prefix} {word}")
            }
        })
        .collect()
}
