//! Phrase resolution via the biword index.

use crate::index::IndexSet;
use crate::index::postings::PostingsList;
use crate::query::wildcard;

/// Resolve a phrase (a sequence of tokens, each with at most one `*`) to a
/// sorted candidate list.
///
/// Without wildcards every adjacent biword must match simultaneously, so
/// the per-biword posting sets are intersected. Once a wildcard expands the
/// biword set beyond its original size, any satisfying expansion is
/// acceptable and the sets are unioned instead.
pub fn resolve(tokens: &[String], indexes: &IndexSet) -> PostingsList {
    if tokens.len() < 2 {
        // No biword can be formed from a single token.
        return PostingsList::new();
    }
    let biword_count = tokens.len() - 1;

    let mut expanded = Vec::with_capacity(biword_count);
    for pair in tokens.windows(2) {
        expanded.extend(expand_biword(&pair[0], &pair[1], indexes));
    }
    if expanded.is_empty() {
        return PostingsList::new();
    }

    let sets: Vec<PostingsList> = expanded
        .iter()
        .map(|biword| {
            indexes
                .biwords()
                .postings(biword)
                .cloned()
                .unwrap_or_default()
        })
        .collect();

    let mut combined = sets[0].clone();
    if expanded.len() > biword_count {
        for set in &sets {
            combined = combined.union(set);
        }
    } else {
        for set in &sets {
            combined = combined.intersect(set);
        }
    }
    combined
}

/// The concrete biwords one (possibly wildcarded) biword expands to: the
/// cartesian product of each position's matching terms.
fn expand_biword(first: &str, second: &str, indexes: &IndexSet) -> Vec<String> {
    let first_terms = position_terms(first, indexes);
    let second_terms = position_terms(second, indexes);
    let mut expanded = Vec::with_capacity(first_terms.len() * second_terms.len());
    for a in &first_terms {
        for b in &second_terms {
            expanded.push(format!("{a} {b}"));
        }
    }
    expanded
}

/// Matching terms for one biword position. Non-wildcard tokens stand for
/// themselves verbatim; no lemmatization inside a phrase.
fn position_terms(token: &str, indexes: &IndexSet) -> Vec<String> {
    if token.contains('*') {
        wildcard::expand(token, indexes)
    } else {
        vec![token.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{ParagraphRecord, ParagraphTable};

    fn indexes(tokenized: &[&str]) -> IndexSet {
        let table = ParagraphTable::from_records(
            tokenized
                .iter()
                .map(|t| ParagraphRecord {
                    document_name: "doc".to_string(),
                    page_number: 0,
                    paragraph_number: 0,
                    text: t.to_string(),
                    tokenized: t.to_string(),
                })
                .collect(),
        );
        IndexSet::build(&table)
    }

    fn tokens(phrase: &str) -> Vec<String> {
        phrase.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_plain_phrase_intersects_biwords() {
        let indexes = indexes(&["red car fast", "blue car slow", "red bike"]);
        assert_eq!(resolve(&tokens("red car"), &indexes).ids(), &[0]);
        assert_eq!(resolve(&tokens("red car fast"), &indexes).ids(), &[0]);
        // "car fast" never follows "blue car" in the same paragraph order.
        assert!(resolve(&tokens("blue car fast"), &indexes).is_empty());
    }

    #[test]
    fn test_adjacency_is_required() {
        let indexes = indexes(&["red fast car"]);
        assert!(resolve(&tokens("red car"), &indexes).is_empty());
    }

    #[test]
    fn test_wildcard_phrase_unions_expansions() {
        let indexes = indexes(&["red car fast", "red cart slow"]);
        // "car*" expands to {car, cart}; both adjacencies are acceptable.
        assert_eq!(resolve(&tokens("red car*"), &indexes).ids(), &[0, 1]);
    }

    #[test]
    fn test_single_token_phrase_is_empty() {
        let indexes = indexes(&["red car"]);
        assert!(resolve(&tokens("red"), &indexes).is_empty());
        assert!(resolve(&[], &indexes).is_empty());
    }

    #[test]
    fn test_unmatched_wildcard_half_drops_biword() {
        let indexes = indexes(&["red car"]);
        assert!(resolve(&tokens("zz* car"), &indexes).is_empty());
    }
}
