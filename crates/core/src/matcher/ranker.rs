//! Candidate ranking.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::config::RankingConfig;
use super::edition::edition_bonus;
use super::scorer::Scorer;
use super::types::{CandidateSubtitle, RankedSubtitle};
use crate::metrics::{CANDIDATES_RANKED, RANKINGS_TOTAL, TOP_SCORE};
use crate::signature::{extract, TechnicalSignature};

/// Number of results written to the info log after ranking.
const LOGGED_RESULTS: usize = 6;

/// Orders subtitle candidates by compatibility with a target signature.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: Scorer,
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RankingConfig) -> Self {
        Self {
            scorer: Scorer::with_config(config),
        }
    }

    pub fn config(&self) -> &RankingConfig {
        self.scorer.config()
    }

    /// Score a single candidate without ordering it.
    pub fn evaluate(
        &self,
        candidate: &CandidateSubtitle,
        target: &TechnicalSignature,
        movie_title: &str,
    ) -> RankedSubtitle {
        let release_text = candidate.release_text();

        let mut signature = extract(release_text);
        signature.confidence = self.config().target.title_guess_confidence;

        let breakdown = self
            .scorer
            .score(target, &signature, movie_title, &candidate.title);
        let edition_bonus = edition_bonus(target.special_edition.as_ref(), release_text);
        let final_score = (breakdown.total + edition_bonus).min(100.0);

        RankedSubtitle {
            candidate: candidate.clone(),
            signature,
            breakdown,
            edition_bonus,
            final_score,
        }
    }

    /// Score every candidate and return them best first.
    ///
    /// Output contains each input exactly once. Scores closer than the noise
    /// threshold are ordered by popularity, then by id.
    pub fn rank(
        &self,
        candidates: &[CandidateSubtitle],
        target: &TechnicalSignature,
        movie_title: &str,
    ) -> Vec<RankedSubtitle> {
        let mut ranked: Vec<RankedSubtitle> = candidates
            .iter()
            .map(|candidate| self.evaluate(candidate, target, movie_title))
            .collect();

        sort_ranked(&mut ranked, self.config().noise_threshold);

        RANKINGS_TOTAL.inc();
        CANDIDATES_RANKED.observe(ranked.len() as f64);
        if let Some(best) = ranked.first() {
            TOP_SCORE.observe(best.final_score);
        }

        info!(
            movie = movie_title,
            target = %target.original_text,
            provenance = target.data_source.as_str(),
            confidence = target.confidence,
            candidates = ranked.len(),
            "Ranked subtitle candidates"
        );
        for (position, result) in ranked.iter().take(LOGGED_RESULTS).enumerate() {
            debug!(
                position = position + 1,
                id = %result.candidate.id,
                title = %result.candidate.title,
                final_score = result.final_score,
                source = result.breakdown.source,
                edition_bonus = result.edition_bonus,
                popularity = result.candidate.popularity,
                "Ranked result"
            );
        }

        ranked
    }
}

/// Rank with the default configuration.
pub fn rank(
    candidates: &[CandidateSubtitle],
    target: &TechnicalSignature,
    movie_title: &str,
) -> Vec<RankedSubtitle> {
    Ranker::new().rank(candidates, target, movie_title)
}

fn canonical_cmp(a: &RankedSubtitle, b: &RankedSubtitle) -> Ordering {
    b.final_score
        .total_cmp(&a.final_score)
        .then_with(|| b.candidate.popularity.cmp(&a.candidate.popularity))
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}

fn tolerant_cmp(a: &RankedSubtitle, b: &RankedSubtitle, noise_threshold: f64) -> Ordering {
    if (a.final_score - b.final_score).abs() >= noise_threshold {
        return b.final_score.total_cmp(&a.final_score);
    }
    b.candidate
        .popularity
        .cmp(&a.candidate.popularity)
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}

/// Deterministic ordering under a non-transitive tolerance comparator.
///
/// The canonical pass fixes a total order first; the stable insertion pass
/// then only swaps neighbours the tolerant comparator disagrees on, so the
/// outcome depends on scores alone and never on input order.
fn sort_ranked(ranked: &mut [RankedSubtitle], noise_threshold: f64) {
    ranked.sort_by(canonical_cmp);

    for i in 1..ranked.len() {
        let mut j = i;
        while j > 0 && tolerant_cmp(&ranked[j - 1], &ranked[j], noise_threshold) == Ordering::Greater {
            ranked.swap(j - 1, j);
            j -= 1;
        }
    }
}
