//! Work-experience extraction: job-title pattern cascade over the experience
//! section, with company and duration resolved from a context window around
//! each title match.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Experience;
use crate::parser::sections::find_section;
use crate::parser::{clamp_to_char_boundary, title_case, truncate_chars};

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(Senior|Junior|Lead|Principal|Staff)?\s*(Software|Data|ML|Machine Learning|Full Stack|Frontend|Backend|DevOps|Cloud|Platform|AI)\s*(Engineer|Developer|Scientist|Analyst|Architect)",
        r"(?i)(Project|Product|Program|Engineering)\s*Manager",
        r"(?i)(CTO|CEO|VP|Director|Head)\s*(?:of)?\s*\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("title pattern must compile"))
    .collect()
});

static COMPANY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:at|@)\s+([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:Inc|Ltd|Corp|LLC|Technologies)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("company pattern must compile"))
    .collect()
});

// "2019 - 2022", "2021 to present", "2020 – current"
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})\s*[-–to]+\s*(\d{4}|present|current)")
        .expect("date range pattern must compile")
});

// "3 years", "2.5 yrs", "5+ years"
static EXPLICIT_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)")
        .expect("duration pattern must compile")
});

pub fn extract_experience(text: &str) -> Vec<Experience> {
    let section = find_section(
        text,
        &["experience", "employment", "work history", "professional"],
    )
    .unwrap_or(text);

    let mut entries: Vec<Experience> = Vec::new();
    for pattern in TITLE_PATTERNS.iter() {
        for m in pattern.find_iter(section) {
            let start = clamp_to_char_boundary(section, m.start().saturating_sub(50));
            let end = clamp_to_char_boundary(section, (m.end() + 300).min(section.len()));
            let context = &section[start..end];

            let (duration, years) = extract_duration(context);
            entries.push(Experience {
                title: title_case(m.as_str().trim()),
                company: extract_company(context),
                duration,
                years,
                description: if context.chars().count() > 50 {
                    Some(truncate_chars(context, 200).to_string())
                } else {
                    None
                },
            });
        }
    }

    // Dedup by lowercase title, keep the first 5.
    let mut seen = std::collections::HashSet::new();
    entries.retain(|e| seen.insert(e.title.to_ascii_lowercase()));
    entries.truncate(5);
    entries
}

fn extract_company(context: &str) -> String {
    for pattern in COMPANY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(context) {
            if let Some(name) = caps.get(1) {
                return name.as_str().to_string();
            }
        }
    }
    "Company".to_string()
}

/// Resolves a (duration label, years) pair from the context window.
/// Year ranges win over explicit "<N> years" phrases; an open-ended range
/// ("present"/"current") closes at the current calendar year.
fn extract_duration(context: &str) -> (String, f64) {
    let lower = context.to_ascii_lowercase();

    if let Some(caps) = DATE_RANGE_RE.captures(&lower) {
        let start_year: i32 = caps[1].parse().unwrap_or(0);
        let end_raw = &caps[2];
        let end_year = if end_raw == "present" || end_raw == "current" {
            Utc::now().year()
        } else {
            end_raw.parse().unwrap_or(start_year)
        };
        let years = (end_year - start_year).max(0) as f64;
        return (caps[0].to_string(), years);
    }

    if let Some(caps) = EXPLICIT_DURATION_RE.captures(&lower) {
        if let Ok(years) = caps[1].parse::<f64>() {
            return (format!("{years} years"), years);
        }
    }

    ("N/A".to_string(), 1.0)
}
