//! Analysis seams: lemmatization, inflection, and token filtering.
//!
//! Tokenization, lemmatization, and inflection are performed by external
//! collaborators. The engine consumes them through the capability traits
//! below so no process-wide NLP state leaks into the core.

/// Characters whose tokens are excluded from the vocabulary when a token
/// consists of nothing else.
const PUNCTUATION: &str = "!()-[]{};:'\"\\,<>./?@#$%^&*_~=+";

/// Reduces a single token to its lowercase canonical form.
///
/// Implementations must be pure and deterministic.
pub trait Lemmatizer: Send + Sync {
    /// The canonical form of `token`.
    fn lemma(&self, token: &str) -> String;
}

/// Expands a lemma into every inflected surface form.
///
/// Only consulted by autocomplete.
pub trait Inflector: Send + Sync {
    /// All inflections of `term`, in a stable order.
    fn inflect_all(&self, term: &str) -> Vec<String>;
}

/// A lemmatizer that lowercases and otherwise passes tokens through.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemma(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// An inflector that reports each term as its own only surface form.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityInflector;

impl Inflector for IdentityInflector {
    fn inflect_all(&self, term: &str) -> Vec<String> {
        vec![term.to_string()]
    }
}

/// Whether `token` consists solely of punctuation characters.
///
/// Such tokens are dropped from per-paragraph posting sets and never enter
/// the vocabulary.
pub fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| PUNCTUATION.contains(c))
}
