//! Free-text release name parsing.
//!
//! Turns strings like `Movie.2020.1080p.BluRay.x264.DTS-SPARKS.mkv` into a
//! [`TechnicalSignature`]. Extraction is pure and infallible: anything that
//! cannot be recognised stays `Unknown`.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::trace;

use super::types::{
    AudioFormat, Codec, DataSource, Quality, SpecialEdition, TechnicalSignature, VideoSource,
};
use super::vocab::{AUDIO_PATTERNS, CODEC_PATTERNS, EDITION_KEYWORDS, QUALITY_PATTERNS, SOURCE_TAGS};

/// Confidence given to a signature parsed from a bare title.
pub const DEFAULT_TITLE_GUESS_CONFIDENCE: u8 = 50;

static TRAILING_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([A-Za-z0-9]+)(?:\.[A-Za-z0-9]{2,4})?$").unwrap());
static BRACKETED_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]").unwrap());
static BRACED_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Parse a release name into a signature with title-guess provenance.
pub fn extract(text: &str) -> TechnicalSignature {
    let lower = text.to_lowercase();

    let signature = TechnicalSignature {
        source: detect_source(&lower),
        quality: detect_quality(&lower),
        codec: detect_codec(&lower),
        audio: detect_audio(&lower),
        release_group: detect_release_group(text),
        special_edition: detect_special_edition(&lower),
        original_text: text.to_string(),
        confidence: DEFAULT_TITLE_GUESS_CONFIDENCE,
        data_source: DataSource::TitleGuess,
    };

    trace!(
        text = text,
        source = %signature.source,
        quality = %signature.quality,
        codec = %signature.codec,
        audio = %signature.audio,
        group = ?signature.release_group,
        edition = ?signature.special_edition,
        "Extracted signature"
    );

    signature
}

/// First source tag found in `lower`, with or without its internal hyphen.
pub fn detect_source(lower: &str) -> VideoSource {
    SOURCE_TAGS
        .iter()
        .copied()
        .find(|source| {
            let tag = source.as_str();
            lower.contains(tag) || lower.contains(&tag.replace('-', ""))
        })
        .unwrap_or(VideoSource::Unknown)
}

pub fn detect_quality(lower: &str) -> Quality {
    QUALITY_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| lower.contains(p)))
        .map(|(quality, _)| *quality)
        .unwrap_or(Quality::Unknown)
}

pub fn detect_codec(lower: &str) -> Codec {
    CODEC_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| lower.contains(p)))
        .map(|(codec, _)| *codec)
        .unwrap_or(Codec::Unknown)
}

pub fn detect_audio(lower: &str) -> AudioFormat {
    AUDIO_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| lower.contains(p)))
        .map(|(audio, _)| *audio)
        .unwrap_or(AudioFormat::Unknown)
}

/// Release group from a trailing `-GROUP`, then `[GROUP]`, then `{GROUP}`.
///
/// Tokens of two characters or fewer are rejected. The result is uppercased.
pub fn detect_release_group(text: &str) -> Option<String> {
    let text = text.trim();

    [&*TRAILING_GROUP, &*BRACKETED_GROUP, &*BRACED_GROUP]
        .iter()
        .filter_map(|re| re.captures(text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .find(|token| token.chars().count() > 2)
        .map(|token| token.to_uppercase())
}

/// Special edition marker, resolving common word pairs to canonical tags.
pub fn detect_special_edition(lower: &str) -> Option<SpecialEdition> {
    let keyword = EDITION_KEYWORDS.iter().find(|kw| lower.contains(*kw))?;

    let has = |word: &str| lower.contains(word);

    let edition = if has("extended") && has("cut") {
        SpecialEdition::ExtendedCut
    } else if has("director") && (has("cut") || has("edition")) {
        SpecialEdition::DirectorsCut
    } else if has("special") && has("edition") {
        SpecialEdition::SpecialEdition
    } else if has("ultimate") && has("edition") {
        SpecialEdition::UltimateEdition
    } else {
        SpecialEdition::Keyword((*keyword).to_string())
    };

    Some(edition)
}
