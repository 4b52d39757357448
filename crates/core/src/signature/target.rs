//! Resolution of the target video's signature from whatever the request
//! carries.
//!
//! Provenance priority: explicit metadata (real filename) > size estimate >
//! title guess.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::estimate::{SizeEstimateConfig, SizeEstimator};
use super::extract::{detect_quality, extract, DEFAULT_TITLE_GUESS_CONFIDENCE};
use super::types::{DataSource, Quality, TechnicalSignature};
use crate::metrics::TARGET_PROVENANCE;

/// Everything known about the video the user is playing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetContext {
    /// Real filename, e.g. from a debrid service's streaming info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    /// Resolution hint such as "1080p".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Free-text stream title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_title: Option<String>,
}

impl TargetContext {
    pub fn from_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Default::default()
        }
    }

    pub fn from_stream_title(title: impl Into<String>) -> Self {
        Self {
            stream_title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Confidence levels and estimation thresholds for target resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Confidence of a signature parsed from the real filename.
    #[serde(default = "default_explicit_confidence")]
    pub explicit_confidence: u8,
    /// Confidence of a signature parsed from a free-text title.
    #[serde(default = "default_title_guess_confidence")]
    pub title_guess_confidence: u8,
    #[serde(default)]
    pub size_estimate: SizeEstimateConfig,
}

fn default_explicit_confidence() -> u8 {
    95
}

fn default_title_guess_confidence() -> u8 {
    DEFAULT_TITLE_GUESS_CONFIDENCE
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            explicit_confidence: default_explicit_confidence(),
            title_guess_confidence: default_title_guess_confidence(),
            size_estimate: SizeEstimateConfig::default(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Build the target signature from the best available evidence.
pub fn resolve_target(context: &TargetContext, config: &TargetConfig) -> TechnicalSignature {
    let estimator = SizeEstimator::with_config(config.size_estimate.clone());
    let stream_title = non_empty(&context.stream_title);

    let signature = if let Some(filename) = non_empty(&context.filename) {
        let mut sig = extract(filename);
        sig.confidence = config.explicit_confidence;
        sig.data_source = DataSource::ExplicitMetadata;

        // Filename without a source tag: let the size fill that gap only
        if !sig.source.is_known() {
            if let Some(size) = context.file_size_bytes {
                let estimate = estimator.estimate(size, sig.quality, context.duration_minutes);
                if !estimate.is_unknown() {
                    sig.source = estimate.source;
                }
            }
        }
        sig
    } else if let Some(sig) = context
        .file_size_bytes
        .and_then(|size| size_estimate_signature(&estimator, size, context, stream_title))
    {
        sig
    } else if let Some(title) = stream_title {
        let mut sig = extract(title);
        sig.confidence = config.title_guess_confidence;
        sig.data_source = DataSource::TitleGuess;
        sig
    } else {
        TechnicalSignature::unknown()
    };

    TARGET_PROVENANCE
        .with_label_values(&[signature.data_source.as_str()])
        .inc();

    debug!(
        source = %signature.source,
        quality = %signature.quality,
        confidence = signature.confidence,
        provenance = signature.data_source.as_str(),
        "Resolved target signature"
    );

    signature
}

fn size_estimate_signature(
    estimator: &SizeEstimator,
    size: u64,
    context: &TargetContext,
    stream_title: Option<&str>,
) -> Option<TechnicalSignature> {
    let mut sig = stream_title.map(extract).unwrap_or_default();

    let hinted_quality = context
        .quality
        .as_deref()
        .map(|q| detect_quality(&q.to_lowercase()))
        .unwrap_or(Quality::Unknown);
    if hinted_quality.is_known() {
        sig.quality = hinted_quality;
    }

    let estimate = estimator.estimate(size, sig.quality, context.duration_minutes);
    if estimate.is_unknown() {
        return None;
    }

    sig.source = estimate.source;
    sig.confidence = estimate.confidence;
    sig.data_source = DataSource::SizeEstimate;
    Some(sig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{Codec, VideoSource};

    const GB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_filename_wins_over_everything() {
        let context = TargetContext {
            filename: Some("Inception.2010.1080p.WEB-DL.x264-GRP.mkv".to_string()),
            file_size_bytes: Some(60 * GB),
            quality: Some("720p".to_string()),
            duration_minutes: Some(148.0),
            stream_title: Some("Inception CAM".to_string()),
        };
        let sig = resolve_target(&context, &TargetConfig::default());
        assert_eq!(sig.data_source, DataSource::ExplicitMetadata);
        assert_eq!(sig.confidence, 95);
        assert_eq!(sig.source, VideoSource::WebDl);
        assert_eq!(sig.quality, Quality::P1080);
        assert_eq!(sig.codec, Codec::X264);
        assert_eq!(sig.release_group.as_deref(), Some("GRP"));
    }

    #[test]
    fn test_filename_without_source_borrows_size_estimate() {
        let context = TargetContext {
            filename: Some("Inception.2010.1080p.mkv".to_string()),
            file_size_bytes: Some(60 * GB),
            duration_minutes: Some(120.0),
            ..Default::default()
        };
        let sig = resolve_target(&context, &TargetConfig::default());
        assert_eq!(sig.data_source, DataSource::ExplicitMetadata);
        assert_eq!(sig.source, VideoSource::Remux);
        assert_eq!(sig.confidence, 95);
    }

    #[test]
    fn test_size_estimate_when_no_filename() {
        let context = TargetContext {
            file_size_bytes: Some(10 * GB),
            quality: Some("1080p".to_string()),
            duration_minutes: Some(120.0),
            stream_title: Some("Inception x265".to_string()),
            ..Default::default()
        };
        let sig = resolve_target(&context, &TargetConfig::default());
        assert_eq!(sig.data_source, DataSource::SizeEstimate);
        assert_eq!(sig.source, VideoSource::WebDl);
        assert_eq!(sig.confidence, 72);
        assert_eq!(sig.quality, Quality::P1080);
        assert_eq!(sig.codec, Codec::X265);
        assert_eq!(sig.original_text, "Inception x265");
    }

    #[test]
    fn test_unestimable_size_falls_back_to_title() {
        let context = TargetContext {
            file_size_bytes: Some(0),
            stream_title: Some("Inception 720p HDTV".to_string()),
            ..Default::default()
        };
        let sig = resolve_target(&context, &TargetConfig::default());
        assert_eq!(sig.data_source, DataSource::TitleGuess);
        assert_eq!(sig.source, VideoSource::Hdtv);
        assert_eq!(sig.confidence, 50);
    }

    #[test]
    fn test_empty_context_is_unknown() {
        let sig = resolve_target(&TargetContext::default(), &TargetConfig::default());
        assert_eq!(sig, TechnicalSignature::unknown());
    }

    #[test]
    fn test_blank_filename_is_ignored() {
        let context = TargetContext {
            filename: Some("   ".to_string()),
            stream_title: Some("Movie BluRay".to_string()),
            ..Default::default()
        };
        let sig = resolve_target(&context, &TargetConfig::default());
        assert_eq!(sig.data_source, DataSource::TitleGuess);
        assert_eq!(sig.source, VideoSource::Bluray);
    }

    #[test]
    fn test_configured_confidences() {
        let config = TargetConfig {
            explicit_confidence: 80,
            title_guess_confidence: 30,
            ..Default::default()
        };
        let explicit = resolve_target(&TargetContext::from_filename("Movie.BluRay.mkv"), &config);
        assert_eq!(explicit.confidence, 80);
        let guess = resolve_target(&TargetContext::from_stream_title("Movie BluRay"), &config);
        assert_eq!(guess.confidence, 30);
    }
}
