//! Resume improvement suggestions derived from a parsed resume and, when
//! available, its match and keyword-gap results. Rules fire in a fixed order
//! so output is deterministic.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::matching::keywords::KeywordGap;
use crate::matching::MatchResult;
use crate::models::resume::ParsedResume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// One of "skills", "keywords", "experience", "format".
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
}

/// Applies the suggestion rules in order: missing required skills, missing
/// JD keywords, thin experience, no summary, no certifications.
pub fn generate_suggestions(
    resume: &ParsedResume,
    match_result: Option<&MatchResult>,
    keyword_gap: Option<&KeywordGap>,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if let Some(result) = match_result {
        if !result.missing_skills.is_empty() {
            let top: Vec<String> = result.missing_skills.iter().take(5).cloned().collect();
            suggestions.push(Suggestion {
                category: "skills".to_string(),
                priority: Priority::High,
                title: "Add missing required skills".to_string(),
                description: format!(
                    "The job requires skills not found on your resume: {}",
                    top.join(", ")
                ),
                action_items: top
                    .iter()
                    .map(|s| format!("Add {s} to your skills section if you have experience with it"))
                    .collect(),
            });
        }
    }

    if let Some(gap) = keyword_gap {
        if !gap.missing_keywords.is_empty() {
            let top: Vec<String> = gap.missing_keywords.iter().take(5).cloned().collect();
            suggestions.push(Suggestion {
                category: "keywords".to_string(),
                priority: Priority::High,
                title: "Incorporate job description keywords".to_string(),
                description: format!(
                    "Your resume is missing keywords the job description emphasizes: {}",
                    top.join(", ")
                ),
                action_items: top
                    .iter()
                    .map(|k| format!("Work \"{k}\" into your experience or summary naturally"))
                    .collect(),
            });
        }
    }

    if resume.experience.len() < 2 {
        suggestions.push(Suggestion {
            category: "experience".to_string(),
            priority: Priority::Medium,
            title: "Strengthen your experience section".to_string(),
            description:
                "Fewer than 2 work experience entries detected. Make roles, durations, and accomplishments explicit."
                    .to_string(),
            action_items: vec![
                "Add date ranges to every role".to_string(),
                "Quantify accomplishments with metrics".to_string(),
                "Include internships and significant projects".to_string(),
            ],
        });
    }

    if resume.summary.is_none() {
        suggestions.push(Suggestion {
            category: "format".to_string(),
            priority: Priority::Medium,
            title: "Add a professional summary".to_string(),
            description:
                "A short summary at the top helps both recruiters and automated screens understand your profile."
                    .to_string(),
            action_items: vec![
                "Add a 2-3 sentence summary under a SUMMARY heading".to_string(),
                "Lead with your role and years of experience".to_string(),
            ],
        });
    }

    if resume.certifications.is_empty() {
        suggestions.push(Suggestion {
            category: "skills".to_string(),
            priority: Priority::Low,
            title: "Consider relevant certifications".to_string(),
            description: "No certifications detected. Certifications can validate expertise for automated screens."
                .to_string(),
            action_items: vec![
                "List any current certifications with issuer names".to_string(),
                "Consider a certification aligned with your target role".to_string(),
            ],
        });
    }

    suggestions
}

/// Overall urgency label driven by the high-priority suggestion count:
/// 2 or more yield "high", exactly one "medium", none "low".
pub fn improvement_priority(suggestions: &[Suggestion]) -> &'static str {
    let high_count = suggestions
        .iter()
        .filter(|s| s.priority == Priority::High)
        .count();
    match high_count {
        0 => "low",
        1 => "medium",
        _ => "high",
    }
}
