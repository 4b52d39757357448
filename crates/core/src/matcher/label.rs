//! Display names for ranked subtitles.

use serde::{Deserialize, Serialize};

use super::types::RankedSubtitle;
use crate::signature::detect_source;

/// Marker added after the tier glyph when the edition bonus is positive.
const EDITION_MARKER: &str = "⭐";

/// Match quality bucket for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Perfect,
    Excellent,
    Good,
    Decent,
    Poor,
}

impl MatchTier {
    /// Pick a tier. `Perfect` is reserved for the top result of a ranking
    /// whose target came from explicit metadata.
    pub fn classify(final_score: f64, is_top_rank: bool, is_high_confidence_match: bool) -> Self {
        if is_top_rank && is_high_confidence_match && final_score >= 95.0 {
            MatchTier::Perfect
        } else if final_score >= 90.0 {
            MatchTier::Excellent
        } else if final_score >= 80.0 {
            MatchTier::Good
        } else if final_score >= 60.0 {
            MatchTier::Decent
        } else {
            MatchTier::Poor
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MatchTier::Perfect => "🏆",
            MatchTier::Excellent => "🎯",
            MatchTier::Good => "✅",
            MatchTier::Decent => "📝",
            MatchTier::Poor => "⚠️",
        }
    }
}

/// Render the display name of a ranked subtitle.
pub fn compose_label(ranked: &RankedSubtitle, is_top_rank: bool, is_high_confidence_match: bool) -> String {
    let candidate = &ranked.candidate;
    let base = candidate.title.to_lowercase();
    let mut name = candidate.title.clone();

    if let Some(edition) = &ranked.signature.special_edition {
        let tag = edition.tag().to_uppercase().replace('-', " ");
        name.push_str(&format!(" [{}]", tag));
    }

    if let Some(version) = candidate.version_text() {
        let source = detect_source(&version.to_lowercase());
        let tag = source.as_str();
        let mentioned = base.contains(tag) || base.contains(&tag.replace('-', ""));
        if source.is_known() && !mentioned {
            name.push_str(&format!(" [{}]", tag.to_uppercase()));
        }
    }

    let tier = MatchTier::classify(ranked.final_score, is_top_rank, is_high_confidence_match);
    let marker = if ranked.edition_bonus > 0.0 { EDITION_MARKER } else { "" };
    let mut label = format!("{}{} {}", tier.glyph(), marker, name);

    if let Some(author) = candidate.author.as_deref().filter(|a| !a.trim().is_empty()) {
        if !label.contains(author) {
            label.push_str(&format!(" - {}", author));
        }
    }

    label
}
