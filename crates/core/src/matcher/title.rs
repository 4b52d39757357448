//! Movie title similarity with sequel awareness.

use std::collections::HashSet;

use tracing::trace;

use crate::signature::vocab::{ARTICLES, SEQUEL_NUMBERS, SEQUEL_WORDS};

/// Score returned when either title is missing.
const NEUTRAL_SCORE: f64 = 50.0;

/// Lowercase, turn punctuation into spaces, drop articles, collapse spaces.
pub fn normalize_title(title: &str) -> String {
    let spaced: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    spaced
        .split_whitespace()
        .filter(|word| !ARTICLES.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_sequel_word(word: &str) -> bool {
    SEQUEL_WORDS.contains(&word) || SEQUEL_NUMBERS.contains(&word)
}

/// Whether a normalized title names a later installment.
pub fn has_sequel_markers(normalized: &str) -> bool {
    normalized.split(' ').any(is_sequel_word)
}

fn significant_words(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|w| w.chars().count() > 2)
        .collect()
}

/// Similarity between the requested movie and a subtitle title, 0-100.
pub fn title_similarity(movie_title: &str, candidate_title: &str) -> f64 {
    let movie = normalize_title(movie_title);
    let candidate = normalize_title(candidate_title);

    if movie.is_empty() || candidate.is_empty() {
        return NEUTRAL_SCORE;
    }

    let score = compare_normalized(&movie, &candidate);
    trace!(movie = %movie, candidate = %candidate, score, "Title similarity");
    score
}

fn compare_normalized(movie: &str, candidate: &str) -> f64 {
    if movie == candidate {
        return 100.0;
    }

    let candidate_is_sequel = has_sequel_markers(candidate);

    // Same franchise, different installment
    if candidate_is_sequel && !has_sequel_markers(movie) {
        let movie_words = significant_words(movie);
        let base_words: HashSet<&str> = significant_words(candidate)
            .into_iter()
            .filter(|w| !is_sequel_word(w))
            .collect();

        if !movie_words.is_empty() && movie_words.iter().all(|w| base_words.contains(w)) {
            return 60.0;
        }
    }

    if !candidate_is_sequel && candidate.starts_with(&format!("{} ", movie)) {
        return 100.0;
    }

    if candidate.contains(movie) {
        return if candidate_is_sequel { 60.0 } else { 90.0 };
    }

    if movie.contains(candidate) {
        return 85.0;
    }

    let movie_words = significant_words(movie);
    let candidate_words = significant_words(candidate);
    let common = movie_words
        .iter()
        .filter(|w| candidate_words.contains(w))
        .count();

    if common == 0 {
        return 10.0;
    }

    let overlap = (common as f64 * 2.0) / (movie_words.len() + candidate_words.len()) as f64 * 100.0;
    overlap.clamp(30.0, 80.0)
}
