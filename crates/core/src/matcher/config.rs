//! Ranking configuration.

use serde::{Deserialize, Serialize};

use crate::signature::TargetConfig;

/// Weights of the scored dimensions. They should sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_source_weight")]
    pub source: f64,
    #[serde(default = "default_quality_weight")]
    pub quality: f64,
    #[serde(default = "default_codec_weight")]
    pub codec: f64,
    #[serde(default = "default_release_group_weight")]
    pub release_group: f64,
    #[serde(default = "default_title_weight")]
    pub title: f64,
}

fn default_source_weight() -> f64 {
    0.40
}

fn default_quality_weight() -> f64 {
    0.25
}

fn default_codec_weight() -> f64 {
    0.15
}

fn default_release_group_weight() -> f64 {
    0.10
}

fn default_title_weight() -> f64 {
    0.10
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            source: default_source_weight(),
            quality: default_quality_weight(),
            codec: default_codec_weight(),
            release_group: default_release_group_weight(),
            title: default_title_weight(),
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.source + self.quality + self.codec + self.release_group + self.title
    }

    fn all(&self) -> [(&'static str, f64); 5] {
        [
            ("source", self.source),
            ("quality", self.quality),
            ("codec", self.codec),
            ("release_group", self.release_group),
            ("title", self.title),
        ]
    }
}

/// Scorer and ranker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Codec is only compared when the target confidence exceeds this.
    #[serde(default = "default_codec_min_confidence")]
    pub codec_min_confidence: u8,
    /// Size estimates earn the provenance bonus above this confidence.
    #[serde(default = "default_size_bonus_min_confidence")]
    pub size_bonus_min_confidence: u8,
    #[serde(default = "default_explicit_bonus")]
    pub explicit_bonus: f64,
    #[serde(default = "default_size_estimate_bonus")]
    pub size_estimate_bonus: f64,
    /// Final scores closer than this are ordered by popularity instead.
    #[serde(default = "default_noise_threshold")]
    pub noise_threshold: f64,
    #[serde(default)]
    pub target: TargetConfig,
}

fn default_codec_min_confidence() -> u8 {
    70
}

fn default_size_bonus_min_confidence() -> u8 {
    60
}

fn default_explicit_bonus() -> f64 {
    5.0
}

fn default_size_estimate_bonus() -> f64 {
    2.0
}

fn default_noise_threshold() -> f64 {
    2.0
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            codec_min_confidence: default_codec_min_confidence(),
            size_bonus_min_confidence: default_size_bonus_min_confidence(),
            explicit_bonus: default_explicit_bonus(),
            size_estimate_bonus: default_size_estimate_bonus(),
            noise_threshold: default_noise_threshold(),
            target: TargetConfig::default(),
        }
    }
}

impl RankingConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in self.weights.all() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("weights.{} must be a non-negative number, got {}", name, weight));
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!("weights must sum to 1.0, got {:.3}", sum));
        }

        if !self.noise_threshold.is_finite() || self.noise_threshold < 0.0 {
            return Err(format!(
                "noise_threshold must be non-negative, got {}",
                self.noise_threshold
            ));
        }

        for (name, value) in [
            ("codec_min_confidence", self.codec_min_confidence),
            ("size_bonus_min_confidence", self.size_bonus_min_confidence),
            ("target.explicit_confidence", self.target.explicit_confidence),
            ("target.title_guess_confidence", self.target.title_guess_confidence),
            ("target.size_estimate.cam_confidence", self.target.size_estimate.cam_confidence),
            ("target.size_estimate.remux_confidence", self.target.size_estimate.remux_confidence),
        ] {
            if value > 100 {
                return Err(format!("{} must be at most 100, got {}", name, value));
            }
        }

        let size = &self.target.size_estimate;
        if size.cam_below_gb_per_hour >= size.remux_above_gb_per_hour {
            return Err(format!(
                "size_estimate.cam_below_gb_per_hour ({}) must be below remux_above_gb_per_hour ({})",
                size.cam_below_gb_per_hour, size.remux_above_gb_per_hour
            ));
        }
        if size.default_duration_minutes <= 0.0 {
            return Err(format!(
                "size_estimate.default_duration_minutes must be positive, got {}",
                size.default_duration_minutes
            ));
        }

        Ok(())
    }
}
