pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching_handlers;
use crate::parser::handlers as resume_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;
use crate::suggestions::handlers as suggestion_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/resume/parse", post(resume_handlers::handle_parse))
        .route("/api/resume/analyze", post(resume_handlers::handle_analyze))
        // Matching API
        .route("/api/matching/match", post(matching_handlers::handle_match))
        .route("/api/matching/rank", post(matching_handlers::handle_rank))
        .route(
            "/api/matching/keywords",
            post(matching_handlers::handle_keywords),
        )
        // Scoring API
        .route("/api/scoring/score", post(scoring_handlers::handle_score))
        .route(
            "/api/scoring/batch",
            post(scoring_handlers::handle_batch_score),
        )
        .route(
            "/api/scoring/thresholds",
            get(scoring_handlers::handle_thresholds),
        )
        // Suggestions API
        .route(
            "/api/suggestions/generate",
            post(suggestion_handlers::handle_generate),
        )
        .with_state(state)
}
