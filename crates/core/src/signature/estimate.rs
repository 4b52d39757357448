//! Source estimation from file size.
//!
//! When the real filename is not available, the bitrate (expressed as GB per
//! hour of runtime) is a decent proxy for how the file was produced.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Quality, VideoSource};
use super::vocab::size_bands_for;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Shortest runtime assumed when converting size to GB/hour.
const MIN_DURATION_HOURS: f64 = 0.5;

/// Result of a size-based estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeEstimate {
    pub source: VideoSource,
    /// 0-100.
    pub confidence: u8,
}

impl SizeEstimate {
    /// Sentinel for sizes that cannot be estimated.
    pub fn unknown() -> Self {
        Self {
            source: VideoSource::Unknown,
            confidence: 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        !self.source.is_known() || self.confidence == 0
    }
}

/// Tunables for size-based estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeEstimateConfig {
    /// Runtime assumed when none is given.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: f64,
    /// Below this bitrate the file is assumed to be a cam recording.
    #[serde(default = "default_cam_below")]
    pub cam_below_gb_per_hour: f64,
    #[serde(default = "default_cam_confidence")]
    pub cam_confidence: u8,
    /// Above this bitrate the file is assumed to be a remux.
    #[serde(default = "default_remux_above")]
    pub remux_above_gb_per_hour: f64,
    #[serde(default = "default_remux_confidence")]
    pub remux_confidence: u8,
}

fn default_duration_minutes() -> f64 {
    120.0
}

fn default_cam_below() -> f64 {
    0.5
}

fn default_cam_confidence() -> u8 {
    60
}

fn default_remux_above() -> f64 {
    50.0
}

fn default_remux_confidence() -> u8 {
    85
}

impl Default for SizeEstimateConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration_minutes(),
            cam_below_gb_per_hour: default_cam_below(),
            cam_confidence: default_cam_confidence(),
            remux_above_gb_per_hour: default_remux_above(),
            remux_confidence: default_remux_confidence(),
        }
    }
}

/// Estimates the video source of a file from its size and runtime.
#[derive(Debug, Clone, Default)]
pub struct SizeEstimator {
    config: SizeEstimateConfig,
}

impl SizeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SizeEstimateConfig) -> Self {
        Self { config }
    }

    /// Bitrate in GB per hour, with the runtime floored at half an hour.
    pub fn gb_per_hour(&self, size_bytes: u64, duration_minutes: Option<f64>) -> f64 {
        let minutes = duration_minutes.unwrap_or(self.config.default_duration_minutes);
        let hours = (minutes / 60.0).max(MIN_DURATION_HOURS);
        (size_bytes as f64 / BYTES_PER_GB) / hours
    }

    /// Estimate the source for a file of `size_bytes` at `quality`.
    ///
    /// Unrecognised qualities use the 1080p bands. A zero size yields the
    /// unknown sentinel.
    pub fn estimate(
        &self,
        size_bytes: u64,
        quality: Quality,
        duration_minutes: Option<f64>,
    ) -> SizeEstimate {
        if size_bytes == 0 {
            return SizeEstimate::unknown();
        }

        let gb_per_hour = self.gb_per_hour(size_bytes, duration_minutes);

        if gb_per_hour < self.config.cam_below_gb_per_hour {
            debug!(gb_per_hour, "Bitrate below cam threshold");
            return SizeEstimate {
                source: VideoSource::Cam,
                confidence: self.config.cam_confidence,
            };
        }
        if gb_per_hour > self.config.remux_above_gb_per_hour {
            debug!(gb_per_hour, "Bitrate above remux threshold");
            return SizeEstimate {
                source: VideoSource::Remux,
                confidence: self.config.remux_confidence,
            };
        }

        let mut best: Option<(VideoSource, f64)> = None;
        for band in size_bands_for(quality) {
            if gb_per_hour < band.min_gb_per_hour || gb_per_hour > band.max_gb_per_hour {
                continue;
            }
            let midpoint = (band.min_gb_per_hour + band.max_gb_per_hour) / 2.0;
            let width = band.max_gb_per_hour - band.min_gb_per_hour;
            let adjusted = band.base_confidence * (1.0 - (gb_per_hour - midpoint).abs() / width);

            if best.map_or(true, |(_, conf)| adjusted > conf) {
                best = Some((band.source, adjusted));
            }
        }

        let estimate = match best {
            Some((source, confidence)) => SizeEstimate {
                source,
                confidence: confidence.round().clamp(0.0, 100.0) as u8,
            },
            None => SizeEstimate::unknown(),
        };

        debug!(
            size_bytes,
            gb_per_hour,
            quality = %quality,
            source = %estimate.source,
            confidence = estimate.confidence,
            "Size-based source estimate"
        );

        estimate
    }
}

/// Estimate with the default thresholds.
pub fn estimate_from_size(
    size_bytes: u64,
    quality: Quality,
    duration_minutes: Option<f64>,
) -> SizeEstimate {
    SizeEstimator::new().estimate(size_bytes, quality, duration_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_zero_size_is_unknown() {
        let estimate = estimate_from_size(0, Quality::P1080, Some(120.0));
        assert_eq!(estimate, SizeEstimate::unknown());
        assert!(estimate.is_unknown());
    }

    #[test]
    fn test_1080p_remux_range() {
        // 60 GB over two hours is 30 GB/h, inside the 15-50 remux band
        let estimate = estimate_from_size(60 * GB, Quality::P1080, Some(120.0));
        assert_eq!(estimate.source, VideoSource::Remux);
        // 90 * (1 - 2.5 / 35) = 83.57
        assert_eq!(estimate.confidence, 84);
    }

    #[test]
    fn test_overlapping_bands_pick_highest_adjusted_confidence() {
        // 5 GB/h: bdrip (4-15) scores 85 * (1 - 4.5/11) = 50.2,
        // web-dl (3-8) scores 80 * (1 - 0.5/5) = 72, webrip (2-6) 75 * (1 - 1/4) = 56.25
        let estimate = estimate_from_size(10 * GB, Quality::P1080, Some(120.0));
        assert_eq!(estimate.source, VideoSource::WebDl);
        assert_eq!(estimate.confidence, 72);
    }

    #[test]
    fn test_low_bitrate_forces_cam() {
        let estimate = estimate_from_size(GB / 2, Quality::P1080, Some(120.0));
        assert_eq!(estimate.source, VideoSource::Cam);
        assert_eq!(estimate.confidence, 60);
    }

    #[test]
    fn test_high_bitrate_forces_remux() {
        let estimate = estimate_from_size(120 * GB, Quality::P1080, Some(120.0));
        assert_eq!(estimate.source, VideoSource::Remux);
        assert_eq!(estimate.confidence, 85);
    }

    #[test]
    fn test_unknown_quality_uses_1080p_table() {
        let a = estimate_from_size(10 * GB, Quality::Unknown, Some(120.0));
        let b = estimate_from_size(10 * GB, Quality::P1080, Some(120.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_duration_is_floored() {
        let estimator = SizeEstimator::new();
        let short = estimator.gb_per_hour(4 * GB, Some(10.0));
        let half_hour = estimator.gb_per_hour(4 * GB, Some(30.0));
        assert!((short - half_hour).abs() < 1e-9);
        assert!((short - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_duration_uses_default() {
        let estimator = SizeEstimator::new();
        let rate = estimator.gb_per_hour(6 * GB, None);
        assert!((rate - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_band_match_is_unknown() {
        // 0.6 GB/h at 2160p falls below every 4K band but above the cam cutoff
        let estimate = estimate_from_size((GB as f64 * 1.2) as u64, Quality::P2160, Some(120.0));
        assert!(estimate.is_unknown());
    }

    #[test]
    fn test_custom_thresholds() {
        let estimator = SizeEstimator::with_config(SizeEstimateConfig {
            remux_above_gb_per_hour: 20.0,
            remux_confidence: 70,
            ..Default::default()
        });
        let estimate = estimator.estimate(60 * GB, Quality::P1080, Some(120.0));
        assert_eq!(estimate.source, VideoSource::Remux);
        assert_eq!(estimate.confidence, 70);
    }
}
