use std::sync::Arc;

use crate::matching::tfidf::{SimilarityScorer, TfIdfSimilarity};
use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the per-process candidate counter used for anonymization.
    pub parser: Arc<ResumeParser>,
    /// Pluggable similarity backend. Default: TF-IDF cosine.
    pub similarity: Arc<dyn SimilarityScorer>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            parser: Arc::new(ResumeParser::new()),
            similarity: Arc::new(TfIdfSimilarity::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh state for handler tests.
#[cfg(test)]
pub fn test_state() -> AppState {
    AppState::new()
}
