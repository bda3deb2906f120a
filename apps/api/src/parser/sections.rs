//! Section location within raw resume text.
//!
//! A section starts at a header line (a line that is just one of the
//! requested keywords, optionally followed by a colon) and runs until the
//! next recognized section header or the end of the text.

/// Header words that terminate a running section.
const SECTION_TERMINATORS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "awards",
    "references",
];

/// Returns the slice of `text` covering the first section whose header
/// matches one of `keywords`, including the header line itself.
pub fn find_section<'a>(text: &'a str, keywords: &[&str]) -> Option<&'a str> {
    let lines = line_offsets(text);

    for keyword in keywords {
        let Some(start_idx) = lines
            .iter()
            .position(|(_, line)| is_header_line(line, keyword))
        else {
            continue;
        };

        let end = lines
            .iter()
            .skip(start_idx + 1)
            .find(|(_, line)| {
                let trimmed = line.trim().to_ascii_lowercase();
                SECTION_TERMINATORS.iter().any(|t| trimmed.starts_with(t))
            })
            .map(|(offset, _)| *offset)
            .unwrap_or(text.len());

        return Some(&text[lines[start_idx].0..end]);
    }
    None
}

fn line_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut pos = 0;
    for line in text.split('\n') {
        lines.push((pos, line));
        pos += line.len() + 1;
    }
    lines
}

/// A header line is the keyword alone, allowing trailing colons/whitespace.
fn is_header_line(line: &str, keyword: &str) -> bool {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.strip_prefix(keyword) {
        Some(rest) => rest.chars().all(|c| c == ':' || c.is_whitespace()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\nSUMMARY\nSeasoned backend engineer.\n\nEXPERIENCE\nBackend Developer at Acme Corp\n2019 - 2022\n\nEDUCATION\nBachelor's in Computer Science, State University, 2018\n";

    #[test]
    fn test_finds_summary_section() {
        let section = find_section(RESUME, &["summary", "objective"]).unwrap();
        assert!(section.contains("Seasoned backend engineer"));
        assert!(
            !section.contains("Acme"),
            "summary section leaked into experience: {section}"
        );
    }

    #[test]
    fn test_finds_experience_section_bounded_by_education() {
        let section = find_section(RESUME, &["experience", "employment"]).unwrap();
        assert!(section.contains("Acme Corp"));
        assert!(!section.contains("State University"));
    }

    #[test]
    fn test_last_section_runs_to_end_of_text() {
        let section = find_section(RESUME, &["education"]).unwrap();
        assert!(section.contains("State University"));
    }

    #[test]
    fn test_header_with_colon_and_mixed_case() {
        let text = "Education:\nMaster's in Data Science\n";
        assert!(find_section(text, &["education"]).is_some());
    }

    #[test]
    fn test_missing_section_returns_none() {
        assert!(find_section(RESUME, &["certifications"]).is_none());
    }

    #[test]
    fn test_keyword_inside_sentence_is_not_a_header() {
        let text = "I have experience with Python\nand nothing else.\n";
        assert!(find_section(text, &["experience"]).is_none());
    }
}
