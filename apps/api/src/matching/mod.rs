//! Resume-to-job matching: TF-IDF semantic similarity plus set-based skill,
//! experience, and education comparison, combined into a weighted match
//! score. Also ranks multiple candidates against one job.

pub mod handlers;
pub mod keywords;
pub mod tfidf;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::keywords::round2;
use crate::matching::tfidf::SimilarityScorer;
use crate::models::job::JobDescription;
use crate::models::resume::ParsedResume;
use crate::parser::title_case;
use crate::scoring::{recommendation_for, Recommendation};

// Match-score weights: semantic 25%, skills 40%, experience 20%, education 15%.
const SEMANTIC_WEIGHT: f64 = 0.25;
const SKILL_WEIGHT: f64 = 0.40;
const EXPERIENCE_WEIGHT: f64 = 0.20;
const EDUCATION_WEIGHT: f64 = 0.15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted combination of the components below, in [0, 100].
    pub match_score: f64,
    pub skill_match_percentage: f64,
    pub experience_match: bool,
    pub education_match: bool,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    /// TF-IDF cosine similarity in [0, 1].
    pub semantic_similarity: f64,
}

/// One entry in a candidate ranking for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRanking {
    pub candidate_id: String,
    pub name: String,
    pub rank: usize,
    pub match_score: f64,
    pub skill_match_percentage: f64,
    pub recommendation: Recommendation,
    pub top_skills: Vec<String>,
    pub experience_years: f64,
}

/// Matches a parsed resume against a job description.
pub fn match_resume_to_job(
    similarity: &dyn SimilarityScorer,
    resume: &ParsedResume,
    job: &JobDescription,
) -> MatchResult {
    let resume_text = resume_to_text(resume);
    let jd_text = jd_to_text(job);
    let semantic_similarity = similarity.similarity(&resume_text, &jd_text);

    let resume_skills: BTreeSet<String> = resume
        .skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect();
    let required: BTreeSet<String> = job
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let preferred: BTreeSet<String> = job
        .preferred_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let all_jd_skills: BTreeSet<String> = required.union(&preferred).cloned().collect();

    let matched: BTreeSet<String> = resume_skills.intersection(&all_jd_skills).cloned().collect();
    let missing: BTreeSet<String> = required.difference(&resume_skills).cloned().collect();
    let extra: Vec<String> = resume_skills
        .difference(&all_jd_skills)
        .take(10)
        .cloned()
        .collect();

    let skill_match_percentage = if !required.is_empty() {
        matched.intersection(&required).count() as f64 / required.len() as f64 * 100.0
    } else if !matched.is_empty() {
        // No required list to measure against: 10 points per matched
        // preferred skill, clamped so the [0, 100] contract holds.
        (matched.len() as f64 * 10.0).min(100.0)
    } else {
        50.0
    };

    let experience_match = check_experience_match(
        resume.total_experience_years,
        job.min_experience_years,
        job.max_experience_years,
    );
    let education_match = check_education_match(resume, &job.education_requirements);

    let match_score = (SEMANTIC_WEIGHT * semantic_similarity * 100.0
        + SKILL_WEIGHT * skill_match_percentage
        + EXPERIENCE_WEIGHT * if experience_match { 100.0 } else { 30.0 }
        + EDUCATION_WEIGHT * if education_match { 100.0 } else { 50.0 })
    .clamp(0.0, 100.0);

    MatchResult {
        match_score: round2(match_score),
        skill_match_percentage: round2(skill_match_percentage),
        experience_match,
        education_match,
        matched_skills: matched.iter().map(|s| title_case(s)).collect(),
        missing_skills: missing.iter().map(|s| title_case(s)).collect(),
        extra_skills: extra.iter().map(|s| title_case(s)).collect(),
        semantic_similarity: round4(semantic_similarity),
    }
}

/// Ranks candidates against one job, best match first. Ties keep the input
/// order (stable sort); ranks are 1-based.
pub fn rank_candidates(
    similarity: &dyn SimilarityScorer,
    candidates: &[ParsedResume],
    job: &JobDescription,
) -> Vec<CandidateRanking> {
    let mut ranked: Vec<(MatchResult, &ParsedResume)> = candidates
        .iter()
        .map(|resume| (match_resume_to_job(similarity, resume, job), resume))
        .collect();
    ranked.sort_by(|a, b| {
        b.0.match_score
            .partial_cmp(&a.0.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (result, resume))| CandidateRanking {
            candidate_id: resume.candidate_id.clone(),
            name: resume.anonymized_name.clone(),
            rank: i + 1,
            match_score: result.match_score,
            skill_match_percentage: result.skill_match_percentage,
            recommendation: recommendation_for(result.match_score),
            top_skills: resume
                .skills
                .iter()
                .take(5)
                .map(|s| s.name.clone())
                .collect(),
            experience_years: resume.total_experience_years,
        })
        .collect()
}

/// Candidate years must reach the minimum, and stay within the maximum when
/// one is given.
fn check_experience_match(candidate_years: f64, min_years: f64, max_years: Option<f64>) -> bool {
    match max_years {
        Some(max) => candidate_years >= min_years && candidate_years <= max,
        None => candidate_years >= min_years,
    }
}

/// Vacuously true with no requirements; false with no education; otherwise
/// true when any requirement word appears in any "<degree> <field>" string.
fn check_education_match(resume: &ParsedResume, requirements: &[String]) -> bool {
    if requirements.is_empty() {
        return true;
    }
    if resume.education.is_empty() {
        return false;
    }
    let education_texts: Vec<String> = resume
        .education
        .iter()
        .map(|e| format!("{} {}", e.degree, e.field).to_lowercase())
        .collect();

    requirements.iter().any(|req| {
        let req_lower = req.to_lowercase();
        education_texts
            .iter()
            .any(|edu| req_lower.split_whitespace().any(|word| edu.contains(word)))
    })
}

/// Flattened text used as the resume side of the similarity computation.
fn resume_to_text(resume: &ParsedResume) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(summary) = &resume.summary {
        parts.push(summary.clone());
    }
    parts.push(resume.primary_role.clone());
    for skill in &resume.skills {
        parts.push(skill.name.clone());
    }
    for exp in &resume.experience {
        parts.push(exp.title.clone());
        parts.push(exp.company.clone());
        if let Some(desc) = &exp.description {
            parts.push(desc.clone());
        }
    }
    for edu in &resume.education {
        parts.push(edu.degree.clone());
        parts.push(edu.field.clone());
        parts.push(edu.institution.clone());
    }
    for cert in &resume.certifications {
        parts.push(cert.name.clone());
    }
    parts.join(" ")
}

fn jd_to_text(job: &JobDescription) -> String {
    [
        job.title.clone(),
        job.description.clone(),
        job.required_skills.join(" "),
        job.preferred_skills.join(" "),
        job.education_requirements.join(" "),
    ]
    .join(" ")
}

pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
