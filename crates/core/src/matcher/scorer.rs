//! Compatibility scoring between a target signature and a candidate.
//!
//! Each dimension produces a 0-100 sub-score that is weighted and, for the
//! technical dimensions, scaled by how much we trust the target signature.
//! Dimensions that cannot be evaluated fall back to a neutral 50 which is
//! weighted but not confidence-scaled.

use tracing::debug;

use super::config::RankingConfig;
use super::title::title_similarity;
use super::types::ScoreBreakdown;
use crate::signature::vocab::{codec_patterns, quality_aliases, SOURCE_COMPATIBILITY_GROUPS};
use crate::signature::{DataSource, TechnicalSignature, VideoSource};

/// Sub-score used when a dimension has nothing to compare.
const NEUTRAL_SUBSCORE: f64 = 50.0;

/// Source compatibility sub-score, 0-100.
///
/// - identical known sources: 100
/// - same compatibility group: 80
/// - both known, unrelated: 40
/// - either unknown: 20
pub fn source_compatibility(target: VideoSource, candidate: VideoSource) -> f64 {
    if target.is_known() && target == candidate {
        100.0
    } else if sources_compatible(target, candidate) {
        80.0
    } else if target.is_known() && candidate.is_known() {
        40.0
    } else {
        20.0
    }
}

fn sources_compatible(a: VideoSource, b: VideoSource) -> bool {
    SOURCE_COMPATIBILITY_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// Scores candidates against a target signature.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: RankingConfig,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Resolution match against the candidate text; `None` when the target
    /// resolution is unknown.
    fn quality_match(&self, target: &TechnicalSignature, candidate_text: &str) -> Option<f64> {
        if !target.quality.is_known() {
            return None;
        }
        if candidate_text.contains(target.quality.as_str()) {
            return Some(100.0);
        }
        if quality_aliases(target.quality)
            .iter()
            .any(|alias| candidate_text.contains(alias))
        {
            return Some(80.0);
        }
        Some(0.0)
    }

    /// Codec match; `None` when the target is not trusted enough or has no codec.
    fn codec_match(&self, target: &TechnicalSignature, candidate_text: &str) -> Option<f64> {
        if target.confidence <= self.config.codec_min_confidence || !target.codec.is_known() {
            return None;
        }
        let found = codec_patterns(target.codec)
            .iter()
            .any(|pattern| candidate_text.contains(pattern));
        Some(if found { 100.0 } else { 0.0 })
    }

    /// Release group match; only meaningful for explicit metadata.
    fn release_group_match(&self, target: &TechnicalSignature, candidate_text: &str) -> Option<f64> {
        if target.data_source != DataSource::ExplicitMetadata {
            return None;
        }
        let group = target.release_group.as_deref()?.to_lowercase();
        Some(if candidate_text.contains(&group) { 100.0 } else { 0.0 })
    }

    fn provenance_bonus(&self, target: &TechnicalSignature) -> f64 {
        match target.data_source {
            DataSource::ExplicitMetadata => self.config.explicit_bonus,
            DataSource::SizeEstimate
                if target.confidence > self.config.size_bonus_min_confidence =>
            {
                self.config.size_estimate_bonus
            }
            _ => 0.0,
        }
    }

    /// Score a candidate signature against the target.
    ///
    /// `movie_title` and `candidate_title` feed the title similarity term;
    /// the candidate's `original_text` feeds the textual matches.
    pub fn score(
        &self,
        target: &TechnicalSignature,
        candidate: &TechnicalSignature,
        movie_title: &str,
        candidate_title: &str,
    ) -> ScoreBreakdown {
        let weights = &self.config.weights;
        let confidence = target.confidence_multiplier();
        let text = candidate.original_text.to_lowercase();

        let source = source_compatibility(target.source, candidate.source);
        let mut total = source * weights.source * confidence;

        let quality = match self.quality_match(target, &text) {
            Some(score) => {
                total += score * weights.quality * confidence;
                score
            }
            None => {
                total += NEUTRAL_SUBSCORE * weights.quality;
                NEUTRAL_SUBSCORE
            }
        };

        let codec = match self.codec_match(target, &text) {
            Some(score) => {
                total += score * weights.codec * confidence;
                score
            }
            None => {
                total += NEUTRAL_SUBSCORE * weights.codec;
                NEUTRAL_SUBSCORE
            }
        };

        let release_group = self
            .release_group_match(target, &text)
            .unwrap_or(NEUTRAL_SUBSCORE);
        total += release_group * weights.release_group;

        let title_similarity = title_similarity(movie_title, candidate_title);
        total += title_similarity * weights.title;

        let provenance_bonus = self.provenance_bonus(target);
        total += provenance_bonus;

        let breakdown = ScoreBreakdown {
            source,
            quality,
            codec,
            release_group,
            title_similarity,
            provenance_bonus,
            total: total.clamp(0.0, 100.0),
        };

        debug!(
            candidate = %candidate.original_text,
            target_source = %target.source,
            candidate_source = %candidate.source,
            source = breakdown.source,
            quality = breakdown.quality,
            codec = breakdown.codec,
            release_group = breakdown.release_group,
            title = breakdown.title_similarity,
            total = breakdown.total,
            "Scored candidate"
        );

        breakdown
    }
}

/// Score with the default configuration.
pub fn score(
    target: &TechnicalSignature,
    candidate: &TechnicalSignature,
    movie_title: &str,
    candidate_title: &str,
) -> ScoreBreakdown {
    Scorer::new().score(target, candidate, movie_title, candidate_title)
}
