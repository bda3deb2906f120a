//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::match_resume_to_job;
use crate::models::job::JobDescription;
use crate::scoring::{
    calculate_ats_score, AtsScore, ScoreWeights, HIRE_THRESHOLD, REVIEW_THRESHOLD,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    /// Optional free-text job description; when present, skills and
    /// keywords are scored relative to it.
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub ats_score: AtsScore,
}

#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    pub resume_texts: Vec<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchScoreEntry {
    pub candidate_id: String,
    pub name: String,
    pub ats_score: AtsScore,
}

#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    pub results: Vec<BatchScoreEntry>,
    pub total_scored: usize,
}

#[derive(Debug, Serialize)]
pub struct ThresholdsResponse {
    pub hire_threshold: f64,
    pub review_threshold: f64,
    pub weights: ScoreWeights,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/scoring/score
///
/// Scores one resume, optionally relative to a job description.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let resume = state.parser.parse(&request.resume_text, true);
    let job = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty())
        .map(JobDescription::from_free_text);
    let match_result = job
        .as_ref()
        .map(|job| match_resume_to_job(state.similarity.as_ref(), &resume, job));
    let ats_score = calculate_ats_score(&resume, job.as_ref(), match_result.as_ref());

    tracing::info!(
        candidate_id = %resume.candidate_id,
        overall_score = ats_score.overall_score,
        recommendation = ?ats_score.recommendation,
        "scored resume"
    );

    Ok(Json(ScoreResponse { ats_score }))
}

/// POST /api/scoring/batch
///
/// Scores a batch of resumes under the same optional job description.
/// Results keep the input order.
pub async fn handle_batch_score(
    State(state): State<AppState>,
    Json(request): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    if request.resume_texts.is_empty() {
        return Err(AppError::Validation(
            "resume_texts cannot be empty".to_string(),
        ));
    }

    let job = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty())
        .map(JobDescription::from_free_text);
    let results: Vec<BatchScoreEntry> = request
        .resume_texts
        .iter()
        .map(|text| {
            let resume = state.parser.parse(text, true);
            let match_result = job
                .as_ref()
                .map(|job| match_resume_to_job(state.similarity.as_ref(), &resume, job));
            let ats_score = calculate_ats_score(&resume, job.as_ref(), match_result.as_ref());
            BatchScoreEntry {
                candidate_id: resume.candidate_id,
                name: resume.anonymized_name,
                ats_score,
            }
        })
        .collect();
    let total_scored = results.len();

    tracing::info!(total_scored, "batch scored resumes");

    Ok(Json(BatchScoreResponse {
        results,
        total_scored,
    }))
}

/// GET /api/scoring/thresholds
///
/// Returns the recommendation thresholds and component weights in use.
pub async fn handle_thresholds() -> Json<ThresholdsResponse> {
    Json(ThresholdsResponse {
        hire_threshold: HIRE_THRESHOLD,
        review_threshold: REVIEW_THRESHOLD,
        weights: ScoreWeights::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    const RESUME: &str = "\
SUMMARY
Senior engineer with broad experience.

SKILLS
Python, Docker, Kubernetes, SQL, Git

EXPERIENCE
Software Engineer at Acme Corp
2017 - 2023
";

    #[tokio::test]
    async fn test_score_rejects_empty_resume() {
        let result = handle_score(
            State(test_state()),
            Json(ScoreRequest {
                resume_text: "\n".to_string(),
                job_description: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_score_without_job_stays_in_range() {
        let Json(response) = handle_score(
            State(test_state()),
            Json(ScoreRequest {
                resume_text: RESUME.to_string(),
                job_description: None,
            }),
        )
        .await
        .expect("score should succeed");

        assert!((0.0..=100.0).contains(&response.ats_score.overall_score));
        assert_eq!(response.ats_score.score_breakdown.len(), 5);
    }

    #[tokio::test]
    async fn test_free_text_job_description_switches_to_match_relative_scoring() {
        let without_jd = handle_score(
            State(test_state()),
            Json(ScoreRequest {
                resume_text: RESUME.to_string(),
                job_description: None,
            }),
        )
        .await
        .expect("score should succeed");

        let with_jd = handle_score(
            State(test_state()),
            Json(ScoreRequest {
                resume_text: RESUME.to_string(),
                job_description: Some("Python development role".to_string()),
            }),
        )
        .await
        .expect("score should succeed");

        // Without a JD the skills component is a step function of skill
        // count; with one it comes from the match result.
        assert_eq!(without_jd.0.ats_score.skills_score, 70.0);
        assert_eq!(with_jd.0.ats_score.skills_score, 50.0);
    }

    #[tokio::test]
    async fn test_batch_rejects_empty_input() {
        let result = handle_batch_score(
            State(test_state()),
            Json(BatchScoreRequest {
                resume_texts: Vec::new(),
                job_description: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order_and_honors_job_description() {
        let Json(response) = handle_batch_score(
            State(test_state()),
            Json(BatchScoreRequest {
                resume_texts: vec![RESUME.to_string(), "SKILLS\nPhotoshop".to_string()],
                job_description: Some("Python development role".to_string()),
            }),
        )
        .await
        .expect("batch score should succeed");

        assert_eq!(response.total_scored, 2);
        // Candidates are lettered in parse order.
        assert_eq!(response.results[0].name, "Candidate A");
        assert_eq!(response.results[1].name, "Candidate B");
        // The Python resume outscores the one without any required skill.
        assert!(
            response.results[0].ats_score.overall_score
                > response.results[1].ats_score.overall_score
        );
    }

    #[tokio::test]
    async fn test_thresholds_reports_constants() {
        let Json(response) = handle_thresholds().await;
        assert_eq!(response.hire_threshold, 80.0);
        assert_eq!(response.review_threshold, 60.0);
        assert_eq!(response.weights.skills, 0.40);
    }
}
