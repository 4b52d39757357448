//! Types describing the technical signature of a video release.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capture/distribution origin of a video file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoSource {
    Bluray,
    Bdrip,
    Remux,
    WebDl,
    Webdl,
    Webrip,
    Hdtv,
    Dvdrip,
    Dvdscr,
    Hdcam,
    Cam,
    Ts,
    #[default]
    Unknown,
}

impl VideoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoSource::Bluray => "bluray",
            VideoSource::Bdrip => "bdrip",
            VideoSource::Remux => "remux",
            VideoSource::WebDl => "web-dl",
            VideoSource::Webdl => "webdl",
            VideoSource::Webrip => "webrip",
            VideoSource::Hdtv => "hdtv",
            VideoSource::Dvdrip => "dvdrip",
            VideoSource::Dvdscr => "dvdscr",
            VideoSource::Hdcam => "hdcam",
            VideoSource::Cam => "cam",
            VideoSource::Ts => "ts",
            VideoSource::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VideoSource::Unknown)
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical resolution tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "2160p")]
    P2160,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "360p")]
    P360,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::P2160 => "2160p",
            Quality::P1080 => "1080p",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::P360 => "360p",
            Quality::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Quality::Unknown)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    X264,
    X265,
    H264,
    H265,
    Hevc,
    Avc,
    Xvid,
    Divx,
    #[default]
    Unknown,
}

impl Codec {
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::X264 => "x264",
            Codec::X265 => "x265",
            Codec::H264 => "h264",
            Codec::H265 => "h265",
            Codec::Hevc => "hevc",
            Codec::Avc => "avc",
            Codec::Xvid => "xvid",
            Codec::Divx => "divx",
            Codec::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Codec::Unknown)
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudioFormat {
    #[serde(rename = "dts-hd")]
    DtsHd,
    #[serde(rename = "dts")]
    Dts,
    #[serde(rename = "truehd")]
    TrueHd,
    #[serde(rename = "atmos")]
    Atmos,
    #[serde(rename = "dd5.1")]
    Dd51,
    #[serde(rename = "ac3")]
    Ac3,
    #[serde(rename = "aac")]
    Aac,
    #[serde(rename = "mp3")]
    Mp3,
    #[serde(rename = "flac")]
    Flac,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::DtsHd => "dts-hd",
            AudioFormat::Dts => "dts",
            AudioFormat::TrueHd => "truehd",
            AudioFormat::Atmos => "atmos",
            AudioFormat::Dd51 => "dd5.1",
            AudioFormat::Ac3 => "ac3",
            AudioFormat::Aac => "aac",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named variant of a release.
///
/// Compound editions are recognised from co-occurring words; anything else
/// keeps the raw keyword that was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecialEdition {
    ExtendedCut,
    DirectorsCut,
    SpecialEdition,
    UltimateEdition,
    Keyword(String),
}

impl SpecialEdition {
    /// Canonical lowercase tag, e.g. `extended-cut`.
    pub fn tag(&self) -> &str {
        match self {
            SpecialEdition::ExtendedCut => "extended-cut",
            SpecialEdition::DirectorsCut => "directors-cut",
            SpecialEdition::SpecialEdition => "special-edition",
            SpecialEdition::UltimateEdition => "ultimate-edition",
            SpecialEdition::Keyword(word) => word,
        }
    }
}

impl From<String> for SpecialEdition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "extended-cut" => SpecialEdition::ExtendedCut,
            "directors-cut" => SpecialEdition::DirectorsCut,
            "special-edition" => SpecialEdition::SpecialEdition,
            "ultimate-edition" => SpecialEdition::UltimateEdition,
            _ => SpecialEdition::Keyword(value),
        }
    }
}

impl From<SpecialEdition> for String {
    fn from(value: SpecialEdition) -> Self {
        value.tag().to_string()
    }
}

impl fmt::Display for SpecialEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How a signature was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    /// Parsed from the real filename reported by the playback side.
    ExplicitMetadata,
    /// Source inferred from file size and duration.
    SizeEstimate,
    /// Parsed from a free-text title.
    #[default]
    TitleGuess,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::ExplicitMetadata => "explicit-metadata",
            DataSource::SizeEstimate => "size-estimate",
            DataSource::TitleGuess => "title-guess",
        }
    }
}

/// Structured technical fingerprint of a release.
///
/// Every field degrades to `Unknown`/`None`; a signature is always produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechnicalSignature {
    pub source: VideoSource,
    pub quality: Quality,
    pub codec: Codec,
    pub audio: AudioFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_edition: Option<SpecialEdition>,
    /// Text the signature was derived from.
    #[serde(default)]
    pub original_text: String,
    /// Trust in this signature, 0-100.
    #[serde(default)]
    pub confidence: u8,
    #[serde(default)]
    pub data_source: DataSource,
}

impl TechnicalSignature {
    /// The all-unknown signature with zero confidence.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Confidence as a 0.0-1.0 multiplier.
    pub fn confidence_multiplier(&self) -> f64 {
        f64::from(self.confidence.min(100)) / 100.0
    }
}
