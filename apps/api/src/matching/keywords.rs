//! Keyword-gap analysis between raw resume text and raw job-description
//! text: tokenize both sides, drop stop words and short tokens, compare the
//! resulting sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stop words excluded from keyword extraction (and from TF-IDF
/// vectorization). Generic resume/JD filler is included alongside the usual
/// English function words.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just",
    "don", "should", "now", "we", "you", "your", "our", "their", "this", "that", "these",
    "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "could", "might", "must", "shall", "what",
    "which", "who", "whom", "years", "year", "experience", "work", "working", "job", "position",
    "role", "team", "company", "looking", "seeking", "required", "requirements",
];

/// How well the resume already covers the JD's keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGap {
    /// JD keywords absent from the resume, capped at 20.
    pub missing_keywords: Vec<String>,
    /// JD keywords present in the resume, capped at 20.
    pub present_keywords: Vec<String>,
    /// |present| / |JD keywords|, 0 when the JD has no keywords.
    pub keyword_density: f64,
    pub optimization_level: OptimizationLevel,
}

/// Compares JD keywords against resume keywords. Density thresholds:
/// >= 0.8 high, >= 0.5 medium, else low.
pub fn analyze_keyword_gaps(resume_text: &str, jd_text: &str) -> KeywordGap {
    let jd_keywords = extract_keywords(jd_text);
    let resume_keywords = extract_keywords(resume_text);

    let missing: Vec<String> = jd_keywords.difference(&resume_keywords).cloned().collect();
    let present: Vec<String> = jd_keywords
        .intersection(&resume_keywords)
        .cloned()
        .collect();

    let density = if jd_keywords.is_empty() {
        0.0
    } else {
        present.len() as f64 / jd_keywords.len() as f64
    };
    let optimization_level = if density >= 0.8 {
        OptimizationLevel::High
    } else if density >= 0.5 {
        OptimizationLevel::Medium
    } else {
        OptimizationLevel::Low
    };

    KeywordGap {
        missing_keywords: missing.into_iter().take(20).collect(),
        present_keywords: present.into_iter().take(20).collect(),
        keyword_density: round2(density),
        optimization_level,
    }
}

/// Lowercased tokens with punctuation stripped; tokens of <= 2 chars and
/// stop words are dropped. Ordered set so output is deterministic.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_drop_stop_words_and_short_tokens() {
        let keywords = extract_keywords("We are looking for a Python engineer in ML");
        assert!(keywords.contains("python"));
        assert!(keywords.contains("engineer"));
        assert!(!keywords.contains("we"), "stop word leaked");
        assert!(!keywords.contains("ml"), "2-char token leaked");
    }

    #[test]
    fn test_punctuation_stripped_before_tokenizing() {
        let keywords = extract_keywords("Python, SQL; Docker!");
        assert!(keywords.contains("python"));
        assert!(keywords.contains("sql"));
        assert!(keywords.contains("docker"));
    }

    #[test]
    fn test_density_is_present_over_jd_keywords() {
        let gaps = analyze_keyword_gaps(
            "python docker developer",
            "python docker kubernetes terraform",
        );
        // 2 of 4 JD keywords present.
        assert_eq!(gaps.keyword_density, 0.5);
        assert_eq!(gaps.optimization_level, OptimizationLevel::Medium);
        assert_eq!(gaps.present_keywords.len(), 2);
        assert_eq!(gaps.missing_keywords.len(), 2);
    }

    #[test]
    fn test_empty_jd_has_zero_density() {
        let gaps = analyze_keyword_gaps("python developer", "");
        assert_eq!(gaps.keyword_density, 0.0);
        assert_eq!(gaps.optimization_level, OptimizationLevel::Low);
        assert!(gaps.missing_keywords.is_empty());
        assert!(gaps.present_keywords.is_empty());
    }

    #[test]
    fn test_stop_word_only_jd_has_zero_density() {
        let gaps = analyze_keyword_gaps("python developer", "we are looking for the team");
        assert_eq!(gaps.keyword_density, 0.0);
    }

    #[test]
    fn test_full_coverage_is_high() {
        let gaps = analyze_keyword_gaps("python docker engineer", "python docker");
        assert_eq!(gaps.keyword_density, 1.0);
        assert_eq!(gaps.optimization_level, OptimizationLevel::High);
    }

    #[test]
    fn test_lists_capped_at_twenty() {
        let jd: String = (0..40).map(|i| format!("keyword{i} ")).collect();
        let gaps = analyze_keyword_gaps("nothing shared", &jd);
        assert_eq!(gaps.missing_keywords.len(), 20);
    }
}
