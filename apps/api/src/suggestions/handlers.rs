//! Axum route handlers for the Suggestions API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::keywords::analyze_keyword_gaps;
use crate::matching::match_resume_to_job;
use crate::models::job::JobDescription;
use crate::state::AppState;
use crate::suggestions::{generate_suggestions, improvement_priority, Suggestion};

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub resume_text: String,
    /// Optional free-text job description; enables the skill-gap and
    /// keyword-gap rules.
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
    pub total_suggestions: usize,
    /// Overall urgency: "high", "medium", or "low", from the number of
    /// high-priority suggestions.
    pub improvement_priority: String,
}

/// POST /api/suggestions/generate
///
/// Generates improvement suggestions for a resume, optionally informed by a
/// job description.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let resume = state.parser.parse(&request.resume_text, true);

    let jd_text = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty());
    let job = jd_text.map(JobDescription::from_free_text);
    let match_result = job
        .as_ref()
        .map(|job| match_resume_to_job(state.similarity.as_ref(), &resume, job));
    let keyword_gaps = jd_text.map(|jd| analyze_keyword_gaps(&request.resume_text, jd));

    let suggestions = generate_suggestions(&resume, match_result.as_ref(), keyword_gaps.as_ref());
    let improvement_priority = improvement_priority(&suggestions).to_string();

    tracing::info!(
        candidate_id = %resume.candidate_id,
        total = suggestions.len(),
        improvement_priority = %improvement_priority,
        "generated suggestions"
    );

    Ok(Json(SuggestionsResponse {
        total_suggestions: suggestions.len(),
        improvement_priority,
        suggestions,
    }))
}
