//! Query parsing and resolution.
//!
//! A query string resolves to a sorted set of candidate paragraph IDs.
//! Non-phrase queries combine quoted AND-terms and bare OR-terms by set
//! algebra over the inverted index; phrase queries verify token adjacency
//! through the biword index. Wildcard sub-tokens are expanded through the
//! permuterm indexes in either mode.

pub mod boolean;
pub mod parser;
pub mod phrase;
pub mod wildcard;

use crate::analysis::Lemmatizer;
use crate::error::Result;
use crate::index::IndexSet;
use crate::index::postings::PostingsList;

/// Resolve a lowercased query string to its sorted candidate paragraphs.
///
/// Phrase mode is an out-of-band flag, not inferred from syntax.
pub fn resolve(
    query: &str,
    phrase: bool,
    indexes: &IndexSet,
    lemmatizer: &dyn Lemmatizer,
) -> Result<PostingsList> {
    if phrase {
        let tokens = parser::parse_phrase(query)?;
        Ok(phrase::resolve(&tokens, indexes))
    } else {
        let parsed = parser::parse_boolean(query)?;
        boolean::resolve(&parsed, indexes, lemmatizer)
    }
}
