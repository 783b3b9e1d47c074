//! Permuterm rotation indexes for single-wildcard lookup.
//!
//! Every vocabulary term `w` contributes `|w| + 1` keys: append the `$`
//! sentinel, enumerate all left-rotations, and key each rotation by the
//! substring after its single `$`. The offset-0 rotation keys the empty
//! string, so the empty key lists the entire vocabulary; a bare `*` query
//! therefore matches every term.
//!
//! The reverse index runs the same construction on `$w` reversed and is
//! consulted for patterns that begin with `*`. Both directions store the
//! original (unreversed) terms as values.

use ahash::AHashMap;

/// Maps rotation-derived keys to the sorted unique vocabulary terms that
/// produced them.
#[derive(Debug, Default)]
pub struct PermutermIndex {
    terms: AHashMap<String, Vec<String>>,
}

impl PermutermIndex {
    /// Build the forward index from a sorted vocabulary: keys derive from
    /// rotations of `w$`.
    pub fn build(vocabulary: &[String]) -> Self {
        Self::build_from(vocabulary, |word| format!("{word}$"))
    }

    /// Build the reverse index: keys derive from rotations of `$w`
    /// reversed.
    pub fn build_reversed(vocabulary: &[String]) -> Self {
        Self::build_from(vocabulary, |word| format!("${word}").chars().rev().collect())
    }

    fn build_from(vocabulary: &[String], sentinel_form: impl Fn(&str) -> String) -> Self {
        let mut terms: AHashMap<String, Vec<String>> = AHashMap::new();
        for word in vocabulary {
            for rotation in rotations(&sentinel_form(word)) {
                // Each rotation carries exactly one sentinel; the key is
                // everything after it.
                if let Some(pos) = rotation.find('$') {
                    terms
                        .entry(rotation[pos + 1..].to_string())
                        .or_default()
                        .push(word.clone());
                }
            }
        }
        for list in terms.values_mut() {
            list.sort_unstable();
            list.dedup();
        }
        PermutermIndex { terms }
    }

    /// The terms posted under `key`, sorted ascending.
    pub fn terms(&self, key: &str) -> Option<&[String]> {
        self.terms.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.terms.len()
    }
}

/// All left-rotations of `s`, enumerated left to right from offset 0.
pub(crate) fn rotations(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    for i in 0..chars.len() {
        let mut rotation = String::with_capacity(s.len());
        rotation.extend(&chars[i..]);
        rotation.extend(&chars[..i]);
        out.push(rotation);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_rotations_enumerate_from_offset_zero() {
        assert_eq!(rotations("abc$"), vec!["abc$", "bc$a", "c$ab", "$abc"]);
        assert!(rotations("").is_empty());
    }

    #[test]
    fn test_forward_keys_are_term_prefixes() {
        let index = PermutermIndex::build(&vocabulary(&["abc"]));

        // Rotations of "abc$" key the empty string and every prefix.
        assert_eq!(index.key_count(), 4);
        assert_eq!(index.terms("").unwrap(), &["abc"]);
        assert_eq!(index.terms("a").unwrap(), &["abc"]);
        assert_eq!(index.terms("ab").unwrap(), &["abc"]);
        assert_eq!(index.terms("abc").unwrap(), &["abc"]);
        assert!(index.terms("bc").is_none());
    }

    #[test]
    fn test_forward_prefix_key_collects_all_terms() {
        let index = PermutermIndex::build(&vocabulary(&["apple", "apply", "ape"]));

        assert_eq!(index.terms("app").unwrap(), &["apple", "apply"]);
        assert_eq!(index.terms("ap").unwrap(), &["ape", "apple", "apply"]);
        assert_eq!(index.terms("").unwrap(), &["ape", "apple", "apply"]);
    }

    #[test]
    fn test_reverse_keys_are_reversed_suffixes() {
        let index = PermutermIndex::build_reversed(&vocabulary(&["bat", "cat", "ball"]));

        // "ta" is "at" reversed: every term ending in "at".
        assert_eq!(index.terms("ta").unwrap(), &["bat", "cat"]);
        // "llab" is "ball" reversed.
        assert_eq!(index.terms("llab").unwrap(), &["ball"]);
        assert_eq!(index.terms("").unwrap(), &["ball", "bat", "cat"]);
    }

    #[test]
    fn test_value_lists_sorted_unique() {
        let index = PermutermIndex::build(&vocabulary(&["zeta", "alpha", "zeta"]));
        assert_eq!(index.terms("").unwrap(), &["alpha", "zeta"]);
    }
}
