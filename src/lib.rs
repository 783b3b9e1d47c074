//! # Calluna
//!
//! A paragraph-level full-text retrieval engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Boolean, exact phrase, and single-wildcard queries
//! - Permuterm and biword indexes built in one batch pass
//! - Smoothed TF-IDF ranking
//! - Damerau-Levenshtein spell correction and prefix autocomplete

pub mod analysis;
mod corpus;
mod engine;
mod error;
pub mod index;
pub mod query;
pub mod scoring;
pub mod spelling;

// Re-exports for the public API
pub use analysis::{IdentityInflector, IdentityLemmatizer, Inflector, Lemmatizer};
pub use corpus::{ParagraphId, ParagraphRecord, ParagraphTable};
pub use engine::SearchEngine;
pub use engine::config::EngineConfig;
pub use engine::search::{SearchHit, SearchRequest, SearchRequestBuilder, SearchResponse};
pub use error::{CallunaError, Result};
pub use index::IndexSet;
pub use index::postings::PostingsList;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
