//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::keywords::{analyze_keyword_gaps, KeywordGap};
use crate::matching::{match_resume_to_job, rank_candidates, CandidateRanking, MatchResult};
use crate::models::job::JobDescription;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: JobDescription,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_result: MatchResult,
    /// Keyword gaps between the raw resume text and the JD description text.
    pub keyword_gaps: KeywordGap,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub resume_texts: Vec<String>,
    pub job_description: JobDescription,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub rankings: Vec<CandidateRanking>,
    pub total_candidates: usize,
}

#[derive(Debug, Deserialize)]
pub struct KeywordGapRequest {
    pub resume_text: String,
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/matching/match
///
/// Matches one resume against a structured job description.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let resume = state.parser.parse(&request.resume_text, true);
    let match_result =
        match_resume_to_job(state.similarity.as_ref(), &resume, &request.job_description);
    let keyword_gaps =
        analyze_keyword_gaps(&request.resume_text, &request.job_description.description);

    tracing::info!(
        candidate_id = %resume.candidate_id,
        job_id = %request.job_description.job_id,
        match_score = match_result.match_score,
        "matched resume to job"
    );

    Ok(Json(MatchResponse {
        match_result,
        keyword_gaps,
    }))
}

/// POST /api/matching/rank
///
/// Parses and ranks a batch of resumes against one job, best match first.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.resume_texts.is_empty() {
        return Err(AppError::Validation(
            "resume_texts cannot be empty".to_string(),
        ));
    }

    let candidates: Vec<_> = request
        .resume_texts
        .iter()
        .map(|text| state.parser.parse(text, true))
        .collect();
    let rankings = rank_candidates(state.similarity.as_ref(), &candidates, &request.job_description);
    let total_candidates = rankings.len();

    tracing::info!(
        job_id = %request.job_description.job_id,
        total_candidates,
        "ranked candidates"
    );

    Ok(Json(RankResponse {
        rankings,
        total_candidates,
    }))
}

/// POST /api/matching/keywords
///
/// Keyword-gap analysis between raw resume text and raw JD text.
pub async fn handle_keywords(
    State(_state): State<AppState>,
    Json(request): Json<KeywordGapRequest>,
) -> Result<Json<KeywordGap>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    Ok(Json(analyze_keyword_gaps(
        &request.resume_text,
        &request.job_description,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    fn python_job() -> JobDescription {
        JobDescription {
            required_skills: vec!["Python".to_string()],
            min_experience_years: 1.0,
            ..JobDescription::from_free_text("Python development role")
        }
    }

    #[tokio::test]
    async fn test_match_rejects_empty_resume() {
        let result = handle_match(
            State(test_state()),
            Json(MatchRequest {
                resume_text: "".to_string(),
                job_description: python_job(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_match_finds_required_skill() {
        let Json(response) = handle_match(
            State(test_state()),
            Json(MatchRequest {
                resume_text: "SKILLS\nPython, Docker\n\nEXPERIENCE\nSoftware Engineer at Acme\n2018 - 2022"
                    .to_string(),
                job_description: python_job(),
            }),
        )
        .await
        .expect("match should succeed");

        assert_eq!(response.match_result.skill_match_percentage, 100.0);
        assert!(response.match_result.matched_skills.contains(&"Python".to_string()));
    }

    #[tokio::test]
    async fn test_match_response_carries_keyword_gaps() {
        let Json(response) = handle_match(
            State(test_state()),
            Json(MatchRequest {
                resume_text: "SKILLS\nPython".to_string(),
                job_description: python_job(),
            }),
        )
        .await
        .expect("match should succeed");

        // Gaps come from resume text vs the JD description text.
        assert!(response
            .keyword_gaps
            .present_keywords
            .contains(&"python".to_string()));
        assert!(response
            .keyword_gaps
            .missing_keywords
            .contains(&"development".to_string()));
    }

    #[tokio::test]
    async fn test_rank_rejects_empty_batch() {
        let result = handle_rank(
            State(test_state()),
            Json(RankRequest {
                resume_texts: Vec::new(),
                job_description: python_job(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rank_returns_one_entry_per_resume() {
        let Json(response) = handle_rank(
            State(test_state()),
            Json(RankRequest {
                resume_texts: vec![
                    "SKILLS\nPython, Docker".to_string(),
                    "SKILLS\nPhotoshop".to_string(),
                ],
                job_description: python_job(),
            }),
        )
        .await
        .expect("rank should succeed");

        assert_eq!(response.total_candidates, 2);
        assert_eq!(response.rankings[0].rank, 1);
        assert_eq!(response.rankings[1].rank, 2);
        assert!(response.rankings[0].match_score >= response.rankings[1].match_score);
    }

    #[tokio::test]
    async fn test_keywords_requires_both_texts() {
        let result = handle_keywords(
            State(test_state()),
            Json(KeywordGapRequest {
                resume_text: "python developer".to_string(),
                job_description: " ".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_keywords_reports_gap() {
        let Json(gap) = handle_keywords(
            State(test_state()),
            Json(KeywordGapRequest {
                resume_text: "python developer".to_string(),
                job_description: "python kubernetes".to_string(),
            }),
        )
        .await
        .expect("keywords should succeed");

        assert_eq!(gap.present_keywords, vec!["python".to_string()]);
        assert_eq!(gap.missing_keywords, vec!["kubernetes".to_string()]);
    }
}
