use serde::{Deserialize, Serialize};

/// Job description supplied by the caller. Immutable value; the pipeline
/// never modifies or persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub job_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default)]
    pub max_experience_years: Option<f64>,
    #[serde(default)]
    pub education_requirements: Vec<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl JobDescription {
    /// Wraps a free-text description into a placeholder job with no
    /// structured requirements. Used by endpoints that accept a plain
    /// job-description string instead of a full `JobDescription`.
    pub fn from_free_text(description: &str) -> Self {
        Self {
            job_id: "JD-TEMP".to_string(),
            title: "Target Position".to_string(),
            description: description.to_string(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            min_experience_years: 0.0,
            max_experience_years: None,
            education_requirements: Vec::new(),
            department: None,
        }
    }
}
