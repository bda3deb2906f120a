//! TF-IDF semantic similarity between a resume text and a job-description
//! text. Pluggable behind `SimilarityScorer` so the backend can be swapped
//! (e.g. for an embedding service) without touching callers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::keywords::STOP_WORDS;

/// Similarity value used whenever vectorization fails (degenerate input,
/// empty vocabulary).
pub const FALLBACK_SIMILARITY: f64 = 0.5;

/// Capability interface for semantic similarity. Held in `AppState` as
/// `Arc<dyn SimilarityScorer>`; implement this to swap backends without
/// touching the matcher or handlers.
pub trait SimilarityScorer: Send + Sync {
    /// Returns a similarity in [0, 1]. Never fails: degenerate input maps
    /// to `FALLBACK_SIMILARITY`.
    fn similarity(&self, left: &str, right: &str) -> f64;
}

/// Default backend: TF-IDF over unigrams + bigrams with stop-word removal,
/// vocabulary capped at `max_features` terms, cosine similarity between the
/// two document vectors.
pub struct TfIdfSimilarity {
    max_features: usize,
}

impl TfIdfSimilarity {
    pub fn new() -> Self {
        Self { max_features: 5000 }
    }
}

impl Default for TfIdfSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer for TfIdfSimilarity {
    fn similarity(&self, left: &str, right: &str) -> f64 {
        cosine_tfidf(left, right, self.max_features).unwrap_or(FALLBACK_SIMILARITY)
    }
}

// Words of at least two word-characters.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern"));

/// Lowercased tokens with stop words removed, plus bigrams over the
/// remaining token sequence.
fn ngrams(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

fn term_counts(terms: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity between the TF-IDF vectors of the two documents.
/// `None` when the joint vocabulary is empty.
fn cosine_tfidf(left: &str, right: &str, max_features: usize) -> Option<f64> {
    let left_terms = ngrams(left);
    let right_terms = ngrams(right);
    let left_counts = term_counts(&left_terms);
    let right_counts = term_counts(&right_terms);

    // Joint vocabulary, most frequent terms first, capped at max_features.
    let mut vocabulary: Vec<&str> = left_counts
        .keys()
        .chain(right_counts.keys())
        .copied()
        .collect::<std::collections::BTreeSet<&str>>()
        .into_iter()
        .collect();
    if vocabulary.is_empty() {
        return None;
    }
    vocabulary.sort_by(|a, b| {
        let count = |t: &str| left_counts.get(t).unwrap_or(&0) + right_counts.get(t).unwrap_or(&0);
        count(b).cmp(&count(a)).then_with(|| a.cmp(b))
    });
    vocabulary.truncate(max_features);

    // Smoothed idf over the two-document corpus: terms in both documents
    // weigh 1.0, terms in one weigh ln(3/2) + 1.
    let n_docs = 2.0_f64;
    let mut left_vec = Vec::with_capacity(vocabulary.len());
    let mut right_vec = Vec::with_capacity(vocabulary.len());
    for term in &vocabulary {
        let lc = *left_counts.get(term).unwrap_or(&0) as f64;
        let rc = *right_counts.get(term).unwrap_or(&0) as f64;
        let df = (lc > 0.0) as u8 as f64 + (rc > 0.0) as u8 as f64;
        let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        left_vec.push(lc * idf);
        right_vec.push(rc * idf);
    }

    let dot: f64 = left_vec
        .iter()
        .zip(&right_vec)
        .map(|(a, b)| a * b)
        .sum();
    let left_norm = left_vec.iter().map(|v| v * v).sum::<f64>().sqrt();
    let right_norm = right_vec.iter().map(|v| v * v).sum::<f64>().sqrt();
    if left_norm == 0.0 || right_norm == 0.0 {
        return Some(0.0);
    }
    Some((dot / (left_norm * right_norm)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_one() {
        let scorer = TfIdfSimilarity::new();
        let text = "python machine learning engineer building production models";
        let sim = scorer.similarity(text, text);
        assert!((sim - 1.0).abs() < 1e-9, "similarity was {sim}");
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let scorer = TfIdfSimilarity::new();
        let sim = scorer.similarity(
            "python tensorflow keras models",
            "plumbing carpentry welding roofing",
        );
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_partial_overlap_scores_between() {
        let scorer = TfIdfSimilarity::new();
        let sim = scorer.similarity(
            "python sql databases analytics",
            "python sql warehouse pipelines",
        );
        assert!(sim > 0.0 && sim < 1.0, "similarity was {sim}");
    }

    #[test]
    fn test_empty_vocabulary_falls_back() {
        let scorer = TfIdfSimilarity::new();
        // Only stop words and short tokens on both sides.
        assert_eq!(scorer.similarity("", ""), FALLBACK_SIMILARITY);
        assert_eq!(
            scorer.similarity("the and or", "a an of"),
            FALLBACK_SIMILARITY
        );
    }

    #[test]
    fn test_one_empty_side_scores_zero() {
        let scorer = TfIdfSimilarity::new();
        assert_eq!(scorer.similarity("python engineer", "the and"), 0.0);
    }

    #[test]
    fn test_stop_words_do_not_contribute() {
        let scorer = TfIdfSimilarity::new();
        let with_stops = scorer.similarity("python with the team", "python");
        let without = scorer.similarity("python", "python");
        assert_eq!(with_stops, without);
    }

    #[test]
    fn test_bigrams_reward_phrase_overlap() {
        let scorer = TfIdfSimilarity::new();
        let phrase = scorer.similarity("machine learning models", "machine learning pipelines");
        let scrambled = scorer.similarity("learning machine models", "machine learning pipelines");
        assert!(
            phrase > scrambled,
            "phrase overlap {phrase} should beat scrambled {scrambled}"
        );
    }
}
