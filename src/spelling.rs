//! Spelling correction and suggestion utilities for Calluna.
//!
//! This module powers typo tolerance across the query pipeline: edit
//! distance based correction of zero-result queries, and prefix
//! autocomplete against the indexed vocabulary.

pub mod corrector;
pub mod suggest;
