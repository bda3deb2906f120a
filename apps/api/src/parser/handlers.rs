//! Axum route handlers for the Resume API.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::keywords::{analyze_keyword_gaps, round2, KeywordGap};
use crate::matching::{match_resume_to_job, MatchResult};
use crate::models::job::JobDescription;
use crate::models::resume::ParsedResume;
use crate::scoring::{calculate_ats_score, AtsScore};
use crate::state::AppState;
use crate::suggestions::{generate_suggestions, Suggestion};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

fn default_anonymize() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
    #[serde(default = "default_anonymize")]
    pub anonymize: bool,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub parsed_resume: ParsedResume,
    pub processing_time_ms: f64,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
    /// Optional free-text job description. When present, the analysis
    /// includes a match result and JD-relative scoring.
    pub job_description: Option<String>,
    #[serde(default = "default_anonymize")]
    pub anonymize: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub parsed_resume: ParsedResume,
    pub ats_score: AtsScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_result: Option<MatchResult>,
    pub keyword_gaps: KeywordGap,
    pub suggestions: Vec<Suggestion>,
    pub processing_time_ms: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/parse
///
/// Parses raw resume text into structured fields. PII is anonymized unless
/// the request opts out.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let started = Instant::now();
    let parsed_resume = state.parser.parse(&request.resume_text, request.anonymize);
    let processing_time_ms = round2(started.elapsed().as_secs_f64() * 1000.0);

    tracing::info!(
        candidate_id = %parsed_resume.candidate_id,
        skills = parsed_resume.skills.len(),
        "parsed resume"
    );

    Ok(Json(ParseResumeResponse {
        parsed_resume,
        processing_time_ms,
    }))
}

/// POST /api/resume/analyze
///
/// Full pipeline: parse, optionally match against a JD, score, analyze
/// keyword gaps, and generate suggestions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let started = Instant::now();
    let parsed_resume = state.parser.parse(&request.resume_text, request.anonymize);

    let job = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty())
        .map(JobDescription::from_free_text);

    let match_result = job
        .as_ref()
        .map(|job| match_resume_to_job(state.similarity.as_ref(), &parsed_resume, job));

    let ats_score = calculate_ats_score(&parsed_resume, job.as_ref(), match_result.as_ref());

    let jd_text = request.job_description.as_deref().unwrap_or("");
    let keyword_gaps = analyze_keyword_gaps(&request.resume_text, jd_text);

    let suggestions =
        generate_suggestions(&parsed_resume, match_result.as_ref(), Some(&keyword_gaps));

    let processing_time_ms = round2(started.elapsed().as_secs_f64() * 1000.0);

    tracing::info!(
        candidate_id = %parsed_resume.candidate_id,
        overall_score = ats_score.overall_score,
        suggestions = suggestions.len(),
        "analyzed resume"
    );

    Ok(Json(AnalyzeResumeResponse {
        parsed_resume,
        ats_score,
        match_result,
        keyword_gaps,
        suggestions,
        processing_time_ms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    const RESUME: &str = "\
Jordan Lee
jordan.lee@example.com

SUMMARY
Machine Learning Engineer skilled in Python and TensorFlow.

EXPERIENCE
Machine Learning Engineer at TechCorp
5 years building production models

EDUCATION
Master's in Computer Science, Stanford University, 2021
";

    #[tokio::test]
    async fn test_parse_rejects_empty_text() {
        let result = handle_parse(
            State(test_state()),
            Json(ParseResumeRequest {
                resume_text: "   ".to_string(),
                anonymize: true,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_parse_returns_anonymized_resume() {
        let Json(response) = handle_parse(
            State(test_state()),
            Json(ParseResumeRequest {
                resume_text: RESUME.to_string(),
                anonymize: true,
            }),
        )
        .await
        .expect("parse should succeed");

        assert!(response.parsed_resume.anonymized_name.starts_with("Candidate "));
        assert!(response.parsed_resume.email.is_none());
        assert!(response.processing_time_ms >= 0.0);
    }

    #[tokio::test]
    async fn test_anonymize_defaults_to_true_in_request_json() {
        let request: ParseResumeRequest =
            serde_json::from_str(r#"{"resume_text": "text"}"#).expect("deserialize");
        assert!(request.anonymize);
    }

    #[tokio::test]
    async fn test_analyze_without_jd_omits_match_result() {
        let Json(response) = handle_analyze(
            State(test_state()),
            Json(AnalyzeResumeRequest {
                resume_text: RESUME.to_string(),
                job_description: None,
                anonymize: true,
            }),
        )
        .await
        .expect("analyze should succeed");

        assert!(response.match_result.is_none());
        assert!((0.0..=100.0).contains(&response.ats_score.overall_score));
        // No JD keywords, so density is zero.
        assert_eq!(response.keyword_gaps.keyword_density, 0.0);
    }

    #[tokio::test]
    async fn test_analyze_with_jd_includes_match_result() {
        let Json(response) = handle_analyze(
            State(test_state()),
            Json(AnalyzeResumeRequest {
                resume_text: RESUME.to_string(),
                job_description: Some(
                    "Machine learning role using Python and TensorFlow".to_string(),
                ),
                anonymize: true,
            }),
        )
        .await
        .expect("analyze should succeed");

        let match_result = response.match_result.expect("match result present");
        assert!((0.0..=100.0).contains(&match_result.match_score));
        assert!(response.keyword_gaps.keyword_density > 0.0);
    }
}
