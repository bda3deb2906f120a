use serde::{Deserialize, Serialize};

/// Category of an extracted skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tool,
}

/// Estimated proficiency level for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    /// Human-readable duration label, e.g. "2021 - present" or "3.5 years".
    pub duration: String,
    pub years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub valid: bool,
}

/// Structured record produced by the resume parser.
///
/// Created fresh per parse call and never mutated afterwards. When
/// `anonymize` was requested the original PII fields are absent entirely,
/// not merely masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub candidate_id: String,
    /// "Candidate A".."Candidate Z" when anonymized, the extracted name otherwise.
    pub anonymized_name: String,

    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,

    /// Sum of all extracted experience entries. Overlapping roles are not
    /// deduplicated, so concurrent positions inflate this total.
    pub total_experience_years: f64,
    pub primary_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    // Original PII, present only when anonymization is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
