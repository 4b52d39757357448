//! Input and output records of the ranking engine.

use serde::{Deserialize, Serialize};

use crate::signature::version_text::MAX_VERSION_TEXT_CHARS;
use crate::signature::{clean_version_text, find_version_string, TechnicalSignature};

/// A subtitle search result as delivered by the subtitle site client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubtitle {
    pub id: String,
    pub title: String,
    /// Download count or equivalent.
    #[serde(default)]
    pub popularity: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language_tag: String,
    /// Richer release description from the detail page, if fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_version_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl CandidateSubtitle {
    pub fn new(id: impl Into<String>, title: impl Into<String>, popularity: u64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            popularity,
            language_tag: String::new(),
            video_version_text: None,
            author: None,
        }
    }

    pub fn with_version_text(mut self, text: impl Into<String>) -> Self {
        self.video_version_text = Some(text.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_language(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = tag.into();
        self
    }

    /// Normalise scraped version text.
    ///
    /// Text longer than a version cell is treated as a page excerpt and
    /// reduced to its first release-looking run before cleaning.
    pub fn with_cleaned_version_text(mut self) -> Self {
        self.video_version_text = self
            .video_version_text
            .take()
            .map(|text| {
                let text = if text.chars().count() > MAX_VERSION_TEXT_CHARS {
                    find_version_string(&text).unwrap_or(text)
                } else {
                    text
                };
                clean_version_text(&text)
            })
            .filter(|text| !text.is_empty());
        self
    }

    /// Version text when present and non-blank.
    pub fn version_text(&self) -> Option<&str> {
        self.video_version_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// The text describing the release this subtitle was made for.
    pub fn release_text(&self) -> &str {
        self.version_text().unwrap_or(&self.title)
    }
}

/// Per-dimension sub-scores, each 0-100, plus the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub source: f64,
    pub quality: f64,
    pub codec: f64,
    pub release_group: f64,
    pub title_similarity: f64,
    /// Additive bonus for trustworthy target metadata.
    pub provenance_bonus: f64,
    /// Weighted sum clamped to 0-100.
    pub total: f64,
}

/// A candidate paired with everything the engine computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSubtitle {
    pub candidate: CandidateSubtitle,
    /// Signature derived from the candidate's version text or title.
    pub signature: TechnicalSignature,
    pub breakdown: ScoreBreakdown,
    pub edition_bonus: f64,
    pub final_score: f64,
}

impl RankedSubtitle {
    /// Source compatibility sub-score.
    pub fn source_score(&self) -> f64 {
        self.breakdown.source
    }

    pub fn id(&self) -> &str {
        &self.candidate.id
    }
}
