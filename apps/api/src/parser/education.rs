//! Education extraction: ordered degree-pattern cascade over the education
//! section (or the full text when no section header is present).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Education;
use crate::parser::sections::find_section;
use crate::parser::tables::{DEFAULT_FIELD, FIELD_KEYWORDS};
use crate::parser::{clamp_to_char_boundary, title_case};

/// Degree-level patterns, scanned in order from highest to lowest level.
static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)ph\.?d\.?|doctorate|doctor of philosophy",
        r"(?i)m\.?s\.?|master'?s?|mba|m\.?tech\.?|m\.?e\.?",
        r"(?i)b\.?s\.?|bachelor'?s?|b\.?tech\.?|b\.?e\.?|b\.?a\.?",
        r"(?i)associate'?s?|diploma|certification",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("degree pattern must compile"))
    .collect()
});

static INSTITUTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:University|Institute|College|School)\s+(?:of\s+)?[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*",
        r"[A-Z][a-z]+\s+(?:University|Institute|College|School)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("institution pattern must compile"))
    .collect()
});

// Graduation years limited to 1980-2029.
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"20[0-2]\d|19[89]\d").expect("year pattern must compile"));

pub fn extract_education(text: &str) -> Vec<Education> {
    let section =
        find_section(text, &["education", "academic", "qualification"]).unwrap_or(text);

    let mut entries: Vec<Education> = Vec::new();
    for pattern in DEGREE_PATTERNS.iter() {
        for m in pattern.find_iter(section) {
            // Trailing context window carries the field, institution, and year.
            let start = clamp_to_char_boundary(section, m.start().saturating_sub(10));
            let end = clamp_to_char_boundary(section, (m.end() + 200).min(section.len()));
            let context = &section[start..end];

            entries.push(Education {
                degree: normalize_degree(m.as_str()),
                field: extract_field(context),
                institution: extract_institution(context),
                year: extract_year(context),
            });
        }
    }

    // Dedup by (degree, field, institution), keep the first 3.
    let mut seen = std::collections::HashSet::new();
    entries.retain(|e| seen.insert((e.degree.clone(), e.field.clone(), e.institution.clone())));
    entries.truncate(3);
    entries
}

fn normalize_degree(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    if ["ph.d", "phd", "doctor"].iter().any(|x| lower.contains(x)) {
        "Ph.D.".to_string()
    } else if ["m.s", "master", "mba", "m.tech", "m.e"]
        .iter()
        .any(|x| lower.contains(x))
    {
        "Master's".to_string()
    } else if ["b.s", "bachelor", "b.tech", "b.e", "b.a"]
        .iter()
        .any(|x| lower.contains(x))
    {
        "Bachelor's".to_string()
    } else if lower.contains("associate") {
        "Associate's".to_string()
    } else {
        title_case(lower.trim())
    }
}

fn extract_field(context: &str) -> String {
    let lower = context.to_ascii_lowercase();
    for (field, keywords) in FIELD_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return (*field).to_string();
        }
    }
    DEFAULT_FIELD.to_string()
}

fn extract_institution(context: &str) -> String {
    for pattern in INSTITUTION_PATTERNS.iter() {
        if let Some(m) = pattern.find(context) {
            return m.as_str().to_string();
        }
    }
    "Unknown Institution".to_string()
}

fn extract_year(context: &str) -> Option<i32> {
    YEAR_RE.find(context).and_then(|m| m.as_str().parse().ok())
}
