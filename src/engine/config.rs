use serde::{Deserialize, Serialize};

/// Configuration for the search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether adjacent transpositions count as single edits
    /// (Damerau-Levenshtein) in spell correction and autocomplete.
    /// Disabled, distances fall back to plain Levenshtein.
    pub transpositions: bool,
}

impl EngineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        EngineConfig {
            transpositions: true,
        }
    }

    /// Set whether transpositions count as single edits.
    pub fn with_transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
