//! Single-wildcard resolution against the permuterm indexes.

use ahash::AHashSet;

use crate::error::{CallunaError, Result};
use crate::index::IndexSet;
use crate::index::permuterm::{PermutermIndex, rotations};
use crate::index::postings::PostingsList;

/// Expand a pattern containing exactly one `*` to its matching vocabulary
/// terms, sorted ascending and unique.
///
/// `prefix*` consults the forward index, `*suffix` the reverse index, and
/// `left*right` intersects the two resolutions. A pattern without `*`
/// expands to nothing; plain terms are the caller's concern.
pub fn expand(pattern: &str, indexes: &IndexSet) -> Vec<String> {
    let mut matches = if !pattern.contains('*') {
        Vec::new()
    } else if pattern.ends_with('*') {
        resolve_leading(pattern, indexes.permuterm())
    } else if pattern.starts_with('*') {
        resolve_trailing(pattern, indexes.reverse_permuterm())
    } else {
        // Both halves constrain the term; match each side and intersect.
        let (left, right) = match pattern.split_once('*') {
            Some(halves) => halves,
            None => return Vec::new(),
        };
        let mut left_matches = resolve_leading(&format!("{left}*"), indexes.permuterm());
        let right_matches = resolve_trailing(&format!("*{right}"), indexes.reverse_permuterm());
        let right_set: AHashSet<&str> = right_matches.iter().map(String::as_str).collect();
        left_matches.retain(|term| right_set.contains(term.as_str()));
        left_matches
    };
    matches.sort_unstable();
    matches.dedup();
    matches
}

/// Resolve a wildcard pattern to the union of its matched terms' postings.
///
/// A matched term missing from the inverted index violates a build
/// invariant and is reported as a fatal internal error.
pub fn resolve_postings(pattern: &str, indexes: &IndexSet) -> Result<PostingsList> {
    let mut ids = Vec::new();
    for term in expand(pattern, indexes) {
        let postings = indexes.inverted().postings(&term).ok_or_else(|| {
            CallunaError::internal(format!(
                "permuterm-matched term missing from the inverted index: {term}"
            ))
        })?;
        ids.extend_from_slice(postings.ids());
    }
    Ok(PostingsList::from_unsorted(ids))
}

/// Terms matching a pattern whose `*` is at the right end (`prefix*`).
fn resolve_leading(pattern: &str, permuterm: &PermutermIndex) -> Vec<String> {
    collect_rotation_matches(&format!("{pattern}$"), permuterm)
}

/// Terms matching a pattern whose `*` is at the left end (`*suffix`).
fn resolve_trailing(pattern: &str, reverse_permuterm: &PermutermIndex) -> Vec<String> {
    let reversed: String = format!("${pattern}").chars().rev().collect();
    collect_rotation_matches(&reversed, reverse_permuterm)
}

/// Enumerate rotations of the sentinel form and look up the one that leads
/// with `*$`, whose tail is the concrete lookup key.
fn collect_rotation_matches(sentinel_form: &str, index: &PermutermIndex) -> Vec<String> {
    let mut matches = Vec::new();
    for rotation in rotations(sentinel_form) {
        if let Some(key) = rotation.strip_prefix("*$") {
            if let Some(terms) = index.terms(key) {
                matches.extend(terms.iter().cloned());
            }
        }
    }
    matches
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

    #[test]
    fn test_prefix_pattern() {
        let indexes = indexes(&["apple", "apply", "ape"]);
        assert_eq!(expand("app*", &indexes), vec!["apple", "apply"]);
        assert_eq!(expand("ap*", &indexes), vec!["ape", "apple", "apply"]);
        assert!(expand("b*", &indexes).is_empty());
    }

    #[test]
    fn test_suffix_pattern() {
        let indexes = indexes(&["bat ball", "cat call"]);
        assert_eq!(expand("*at", &indexes), vec!["bat", "cat"]);
        assert_eq!(expand("*all", &indexes), vec!["ball", "call"]);
        assert!(expand("*zz", &indexes).is_empty());
    }

    #[test]
    fn test_infix_pattern_intersects_halves() {
        let indexes = indexes(&["bake bike brake like"]);
        // b*ke: starts with "b" and ends with "ke".
        assert_eq!(expand("b*ke", &indexes), vec!["bake", "bike", "brake"]);
        assert_eq!(expand("br*ke", &indexes), vec!["brake"]);
        assert_eq!(expand("l*ke", &indexes), vec!["like"]);
    }

    #[test]
    fn test_bare_star_matches_whole_vocabulary() {
        let indexes = indexes(&["red car"]);
        assert_eq!(expand("*", &indexes), vec!["car", "red"]);
    }

    #[test]
    fn test_pattern_matching_term_exactly() {
        let indexes = indexes(&["cat cart"]);
        // "cat*" matches "cat" itself via the full-word rotation key.
        assert_eq!(expand("cat*", &indexes), vec!["cat"]);
        assert_eq!(expand("ca*", &indexes), vec!["cart", "cat"]);
    }

    #[test]
    fn test_resolve_postings_unions_matches() {
        let indexes = indexes(&["bat ball", "cat call", "bat call"]);
        let postings = resolve_postings("*at", &indexes).unwrap();
        assert_eq!(postings.ids(), &[0, 1, 2]);

        let postings = resolve_postings("ball*", &indexes).unwrap();
        assert_eq!(postings.ids(), &[0]);
    }
}
