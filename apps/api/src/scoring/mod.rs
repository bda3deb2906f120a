//! ATS scoring: deterministic weighted combination of five component scores
//! into an overall 0-100 score with a hire/review/reject recommendation.

pub mod handlers;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;
use crate::models::job::JobDescription;
use crate::models::resume::ParsedResume;

/// Component weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
    pub format: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.30,
            education: 0.15,
            keywords: 0.10,
            format: 0.05,
        }
    }
}

pub const HIRE_THRESHOLD: f64 = 80.0;
pub const REVIEW_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Hire,
    Review,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub keyword_score: f64,
    pub format_score: f64,
    /// Weighted contribution per component, labeled with its weight.
    pub score_breakdown: BTreeMap<String, f64>,
    pub recommendation: Recommendation,
    pub confidence: f64,
}

pub fn recommendation_for(score: f64) -> Recommendation {
    if score >= HIRE_THRESHOLD {
        Recommendation::Hire
    } else if score >= REVIEW_THRESHOLD {
        Recommendation::Review
    } else {
        Recommendation::Reject
    }
}

/// Scores a parsed resume, optionally against a job and an existing match
/// result. Pure function of its inputs.
pub fn calculate_ats_score(
    resume: &ParsedResume,
    job: Option<&JobDescription>,
    match_result: Option<&MatchResult>,
) -> AtsScore {
    let weights = ScoreWeights::default();

    let skills = skills_score(resume, match_result);
    let experience = experience_score(resume, job);
    let education = education_score(resume);
    let keywords = keyword_score(resume, match_result);
    let format = format_score(resume);

    let overall = skills * weights.skills
        + experience * weights.experience
        + education * weights.education
        + keywords * weights.keywords
        + format * weights.format;

    let confidence = if resume.skills.len() >= 5 { 0.8 } else { 0.7 };

    let mut score_breakdown = BTreeMap::new();
    score_breakdown.insert("Skills (40%)".to_string(), round1(skills * weights.skills));
    score_breakdown.insert(
        "Experience (30%)".to_string(),
        round1(experience * weights.experience),
    );
    score_breakdown.insert(
        "Education (15%)".to_string(),
        round1(education * weights.education),
    );
    score_breakdown.insert(
        "Keywords (10%)".to_string(),
        round1(keywords * weights.keywords),
    );
    score_breakdown.insert("Format (5%)".to_string(), round1(format * weights.format));

    AtsScore {
        overall_score: round1(overall),
        skills_score: round1(skills),
        experience_score: round1(experience),
        education_score: round1(education),
        keyword_score: round1(keywords),
        format_score: round1(format),
        score_breakdown,
        recommendation: recommendation_for(overall),
        confidence,
    }
}

/// Match-derived when available, otherwise a step function of skill count.
fn skills_score(resume: &ParsedResume, match_result: Option<&MatchResult>) -> f64 {
    if let Some(result) = match_result {
        return result.skill_match_percentage;
    }
    match resume.skills.len() {
        n if n >= 15 => 95.0,
        n if n >= 10 => 85.0,
        n if n >= 5 => 70.0,
        _ => 50.0,
    }
}

/// Against a stated minimum: full marks at or above it, 20 points lost per
/// missing year below it. Without one: step function on raw years.
fn experience_score(resume: &ParsedResume, job: Option<&JobDescription>) -> f64 {
    let years = resume.total_experience_years;
    if let Some(job) = job {
        if job.min_experience_years > 0.0 {
            if years >= job.min_experience_years {
                return 100.0;
            }
            return (100.0 - (job.min_experience_years - years) * 20.0).max(0.0);
        }
    }
    if years >= 5.0 {
        95.0
    } else if years >= 3.0 {
        85.0
    } else if years >= 1.0 {
        70.0
    } else {
        50.0
    }
}

/// Step function on the highest degree present.
fn education_score(resume: &ParsedResume) -> f64 {
    if resume.education.is_empty() {
        return 50.0;
    }
    let degrees: Vec<String> = resume
        .education
        .iter()
        .map(|e| e.degree.to_lowercase())
        .collect();
    if degrees.iter().any(|d| d.contains("ph.d")) {
        100.0
    } else if degrees.iter().any(|d| d.contains("master")) {
        90.0
    } else if degrees.iter().any(|d| d.contains("bachelor")) {
        80.0
    } else {
        60.0
    }
}

fn keyword_score(resume: &ParsedResume, match_result: Option<&MatchResult>) -> f64 {
    if let Some(result) = match_result {
        return (result.semantic_similarity * 120.0).min(100.0);
    }
    if resume.summary.is_some() {
        75.0
    } else {
        60.0
    }
}

/// Base 80, plus small bonuses for summary, multiple experience entries,
/// and certifications, capped at 100.
fn format_score(resume: &ParsedResume) -> f64 {
    let mut score: f64 = 80.0;
    if resume.summary.is_some() {
        score += 5.0;
    }
    if resume.experience.len() >= 2 {
        score += 10.0;
    }
    if !resume.certifications.is_empty() {
        score += 5.0;
    }
    score.min(100.0)
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
