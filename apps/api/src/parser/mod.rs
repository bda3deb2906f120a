//! Resume parsing: regex-heuristic extraction of structured data from raw
//! resume text. Extraction never fails — every miss degrades to a sentinel
//! default ("Unknown Candidate", "Unknown Institution", "N/A"/1.0 years).

pub mod education;
pub mod experience;
pub mod handlers;
pub mod sections;
pub mod tables;

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::models::resume::{
    Certification, ParsedResume, Proficiency, Skill, SkillCategory,
};
use crate::parser::sections::find_section;
use crate::parser::tables::{
    CERT_ISSUERS, DEFAULT_ISSUER, DEFAULT_ROLE, NAME_BLOCKLIST, PROFICIENCY_TIERS, ROLE_RULES,
    SOFT_SKILLS, TECHNICAL_SKILLS,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

// International-prefixed first, then bare 10-digit.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone pattern"))
    .collect()
});

// Labeled location first, then "City, ST", then "City, Country".
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:Location|Address|City):\s*([^\n]+)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,\s*[A-Z]{2})",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,\s*[A-Za-z]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("location pattern"))
    .collect()
});

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s.\-]+$").expect("name pattern"));

static CERT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(AWS|Azure|GCP|Google Cloud)\s*(Certified|Professional|Associate|Solutions Architect|Developer|Administrator)",
        r"(?i)(PMP|CISSP|CCNA|CCNP|CKA|CKAD)",
        r"(?i)(Certified|Certificate)\s*(?:in)?\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"(?i)(TensorFlow|PyTorch|Kubernetes|Docker)\s*(?:Certified|Certification)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("certification pattern"))
    .collect()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Resume parser. Holds only the counter used to cycle anonymized display
/// letters; each `parse` call is otherwise a pure function of its input.
pub struct ResumeParser {
    candidate_counter: AtomicU64,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            candidate_counter: AtomicU64::new(0),
        }
    }

    /// Parses raw resume text into a structured record. Never fails on
    /// malformed input.
    pub fn parse(&self, text: &str, anonymize: bool) -> ParsedResume {
        let candidate_id = new_candidate_id();
        let serial = self.candidate_counter.fetch_add(1, Ordering::Relaxed);

        let name = extract_name(text);
        let email = extract_email(text);
        let phone = extract_phone(text);
        let location = extract_location(text);

        let skills = extract_skills(text);
        let education = education::extract_education(text);
        let experience = experience::extract_experience(text);
        let certifications = extract_certifications(text);

        let total_experience_years: f64 = experience.iter().map(|e| e.years).sum();
        let primary_role = determine_primary_role(&experience, &skills);
        let summary = extract_summary(text);

        let anonymized_name = if anonymize {
            let letter = (b'A' + (serial % 26) as u8) as char;
            format!("Candidate {letter}")
        } else {
            name.clone()
        };

        ParsedResume {
            candidate_id,
            anonymized_name,
            skills,
            education,
            experience,
            certifications,
            total_experience_years,
            primary_role,
            summary,
            original_name: (!anonymize).then_some(name),
            email: if anonymize { None } else { email },
            phone: if anonymize { None } else { phone },
            location: if anonymize { None } else { location },
        }
    }
}

fn new_candidate_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("CAND-{}", hex[..8].to_uppercase())
}

/// Scans the first 5 non-empty lines for something name-shaped: short,
/// letters/spaces/periods/hyphens only, at most 4 words, and free of
/// header/contact keywords. First qualifying line wins.
fn extract_name(text: &str) -> String {
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()).take(5) {
        if line.len() >= 50 {
            continue;
        }
        let lower = line.to_ascii_lowercase();
        if NAME_BLOCKLIST.iter().any(|word| lower.contains(word)) {
            continue;
        }
        if NAME_RE.is_match(line) && line.split_whitespace().count() <= 4 {
            return title_case(line);
        }
    }
    "Unknown Candidate".to_string()
}

fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|p| p.find(text))
        .map(|m| m.as_str().to_string())
}

fn extract_location(text: &str) -> Option<String> {
    LOCATION_PATTERNS.iter().find_map(|p| {
        p.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Case-insensitive substring membership against the fixed skill tables.
fn extract_skills(text: &str) -> Vec<Skill> {
    let lower = text.to_ascii_lowercase();
    let mut skills = Vec::new();

    for &skill in TECHNICAL_SKILLS {
        if lower.contains(skill) {
            skills.push(Skill {
                name: display_skill_name(skill),
                category: SkillCategory::Technical,
                proficiency: Some(estimate_proficiency(&lower, skill)),
            });
        }
    }
    for &skill in SOFT_SKILLS {
        if lower.contains(skill) {
            skills.push(Skill {
                name: title_case(skill),
                category: SkillCategory::Soft,
                proficiency: Some(Proficiency::Intermediate),
            });
        }
    }
    skills
}

/// Short skill names ("sql", "aws") are acronyms and rendered uppercase.
fn display_skill_name(skill: &str) -> String {
    if skill.len() > 3 {
        title_case(skill)
    } else {
        skill.to_uppercase()
    }
}

/// Checks a ±100-char window around the first occurrence of the skill
/// against the ordered proficiency tiers; first matching tier wins.
fn estimate_proficiency(lower_text: &str, skill: &str) -> Proficiency {
    let Some(pos) = lower_text.find(skill) else {
        return Proficiency::Intermediate;
    };
    let start = clamp_to_char_boundary(lower_text, pos.saturating_sub(100));
    let end = clamp_to_char_boundary(lower_text, (pos + skill.len() + 100).min(lower_text.len()));
    let window = &lower_text[start..end];

    for (proficiency, markers) in PROFICIENCY_TIERS {
        if markers.iter().any(|m| window.contains(m)) {
            return *proficiency;
        }
    }
    Proficiency::Intermediate
}

fn extract_certifications(text: &str) -> Vec<Certification> {
    let mut certifications = Vec::new();
    for pattern in CERT_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let name = m.as_str().trim().to_string();
            let issuer = determine_cert_issuer(&name);
            certifications.push(Certification {
                name,
                issuer,
                valid: true,
            });
        }
    }
    certifications.truncate(5);
    certifications
}

fn determine_cert_issuer(cert_name: &str) -> String {
    let lower = cert_name.to_ascii_lowercase();
    for (trigger, issuer) in CERT_ISSUERS {
        if lower.contains(trigger) {
            return (*issuer).to_string();
        }
    }
    DEFAULT_ISSUER.to_string()
}

/// Most recent experience title, else inferred from skill names, else the
/// generic fallback.
fn determine_primary_role(
    experience: &[crate::models::resume::Experience],
    skills: &[Skill],
) -> String {
    if let Some(first) = experience.first() {
        return first.title.clone();
    }
    let skill_names: Vec<String> = skills.iter().map(|s| s.name.to_ascii_lowercase()).collect();
    for (role, triggers) in ROLE_RULES {
        if skill_names
            .iter()
            .any(|name| triggers.iter().any(|t| name.contains(t)))
        {
            return (*role).to_string();
        }
    }
    DEFAULT_ROLE.to_string()
}

/// Whitespace-collapsed summary/objective section, truncated to 500 chars.
fn extract_summary(text: &str) -> Option<String> {
    let section = find_section(text, &["summary", "objective", "profile", "about"])?;
    let collapsed = WHITESPACE_RE.replace_all(section, " ");
    let trimmed = collapsed.trim();
    Some(truncate_chars(trimmed, 500).to_string())
}

/// Python-style title case: uppercase every letter that follows a
/// non-letter, lowercase the rest.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Largest char-boundary index ≤ `i`, so window slicing never panics on
/// multi-byte input.
pub(crate) fn clamp_to_char_boundary(s: &str, mut i: usize) -> usize {
    i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// First `max` chars of `s` (not bytes).
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
