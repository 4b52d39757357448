//! Fixed vocabularies used by signature extraction and scoring.
//!
//! All matching is done against lowercased text. Order matters: the first
//! entry that matches wins.

use super::types::{AudioFormat, Codec, Quality, VideoSource};

/// Source tags in detection order.
pub const SOURCE_TAGS: &[VideoSource] = &[
    VideoSource::Bluray,
    VideoSource::Bdrip,
    VideoSource::Remux,
    VideoSource::WebDl,
    VideoSource::Webdl,
    VideoSource::Webrip,
    VideoSource::Hdtv,
    VideoSource::Dvdrip,
    VideoSource::Dvdscr,
    VideoSource::Hdcam,
    VideoSource::Cam,
    VideoSource::Ts,
];

/// Sources that share a master and usually share subtitle timing.
pub const SOURCE_COMPATIBILITY_GROUPS: &[&[VideoSource]] = &[
    &[VideoSource::Bluray, VideoSource::Bdrip, VideoSource::Remux],
    &[VideoSource::WebDl, VideoSource::Webdl, VideoSource::Webrip],
    &[VideoSource::Dvdrip, VideoSource::Dvdscr],
    &[VideoSource::Hdcam, VideoSource::Cam, VideoSource::Ts],
];

/// Resolution patterns used for detection.
pub const QUALITY_PATTERNS: &[(Quality, &[&str])] = &[
    (Quality::P2160, &["2160p", "4k"]),
    (Quality::P1080, &["1080p"]),
    (Quality::P720, &["720p"]),
    (Quality::P480, &["480p"]),
    (Quality::P360, &["360p"]),
];

/// Looser resolution aliases accepted when scoring a candidate.
pub const QUALITY_ALIASES: &[(Quality, &[&str])] = &[
    (Quality::P2160, &["4k", "2160p", "uhd"]),
    (Quality::P1080, &["1080p", "fhd", "fullhd"]),
    (Quality::P720, &["720p", "hd"]),
    (Quality::P480, &["480p", "sd"]),
];

pub const CODEC_PATTERNS: &[(Codec, &[&str])] = &[
    (Codec::X264, &["x264"]),
    (Codec::X265, &["x265"]),
    (Codec::H264, &["h264", "h.264"]),
    (Codec::H265, &["h265", "h.265"]),
    (Codec::Hevc, &["hevc"]),
    (Codec::Avc, &["avc"]),
    (Codec::Xvid, &["xvid"]),
    (Codec::Divx, &["divx"]),
];

pub const AUDIO_PATTERNS: &[(AudioFormat, &[&str])] = &[
    (AudioFormat::DtsHd, &["dts-hd", "dtshd", "dts.hd"]),
    (AudioFormat::Dts, &["dts"]),
    (AudioFormat::TrueHd, &["truehd", "true-hd"]),
    (AudioFormat::Atmos, &["atmos"]),
    (AudioFormat::Dd51, &["dd5.1", "dd5 1", "ddp5.1", "dd+5.1"]),
    (AudioFormat::Ac3, &["ac3"]),
    (AudioFormat::Aac, &["aac"]),
    (AudioFormat::Mp3, &["mp3"]),
    (AudioFormat::Flac, &["flac"]),
];

/// Words that mark a named release variant.
pub const EDITION_KEYWORDS: &[&str] = &[
    "extended",
    "director",
    "directors",
    "special",
    "edition",
    "cut",
    "uncut",
    "unrated",
    "theatrical",
    "ultimate",
    "remastered",
    "anniversary",
    "collectors",
    "limited",
    "deluxe",
    "redux",
    "final",
    "complete",
    "definitive",
    "alternate",
    "international",
];

/// Words that mark a later installment of a franchise.
pub const SEQUEL_WORDS: &[&str] = &[
    "reloaded",
    "revolutions",
    "resurrection",
    "begins",
    "returns",
    "rises",
    "awakens",
    "forever",
    "reborn",
    "origins",
    "legacy",
    "part",
    "ii",
    "iii",
    "iv",
    "v",
];

/// Bare installment numbers.
pub const SEQUEL_NUMBERS: &[&str] = &["2", "3", "4", "5", "6", "7", "8", "9", "10"];

/// English articles dropped from titles before comparison.
pub const ARTICLES: &[&str] = &["the", "a", "an"];

/// GB-per-hour range that a source typically occupies at a resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBand {
    pub source: VideoSource,
    pub min_gb_per_hour: f64,
    pub max_gb_per_hour: f64,
    pub base_confidence: f64,
}

const fn band(source: VideoSource, min: f64, max: f64, confidence: f64) -> SizeBand {
    SizeBand {
        source,
        min_gb_per_hour: min,
        max_gb_per_hour: max,
        base_confidence: confidence,
    }
}

/// Per-resolution size bands.
pub const SIZE_BANDS: &[(Quality, &[SizeBand])] = &[
    (
        Quality::P2160,
        &[
            band(VideoSource::Remux, 25.0, 80.0, 90.0),
            band(VideoSource::Bdrip, 8.0, 25.0, 85.0),
            band(VideoSource::WebDl, 6.0, 15.0, 80.0),
            band(VideoSource::Webrip, 4.0, 10.0, 75.0),
        ],
    ),
    (
        Quality::P1080,
        &[
            band(VideoSource::Remux, 15.0, 50.0, 90.0),
            band(VideoSource::Bdrip, 4.0, 15.0, 85.0),
            band(VideoSource::WebDl, 3.0, 8.0, 80.0),
            band(VideoSource::Webrip, 2.0, 6.0, 75.0),
            band(VideoSource::Hdtv, 1.0, 4.0, 70.0),
        ],
    ),
    (
        Quality::P720,
        &[
            band(VideoSource::Bdrip, 2.0, 8.0, 85.0),
            band(VideoSource::WebDl, 1.5, 4.0, 80.0),
            band(VideoSource::Webrip, 1.0, 3.0, 75.0),
            band(VideoSource::Hdtv, 0.5, 2.0, 70.0),
        ],
    ),
    (
        Quality::P480,
        &[
            band(VideoSource::Dvdrip, 0.7, 2.0, 80.0),
            band(VideoSource::Webrip, 0.3, 1.0, 75.0),
            band(VideoSource::Hdtv, 0.2, 0.8, 70.0),
        ],
    ),
];

/// Size bands for a resolution, falling back to the 1080p table.
pub fn size_bands_for(quality: Quality) -> &'static [SizeBand] {
    SIZE_BANDS
        .iter()
        .find(|(q, _)| *q == quality)
        .or_else(|| SIZE_BANDS.iter().find(|(q, _)| *q == Quality::P1080))
        .map(|(_, bands)| *bands)
        .unwrap_or(&[])
}

/// Match patterns for a codec (empty for `Unknown`).
pub fn codec_patterns(codec: Codec) -> &'static [&'static str] {
    CODEC_PATTERNS
        .iter()
        .find(|(c, _)| *c == codec)
        .map(|(_, patterns)| *patterns)
        .unwrap_or(&[])
}

/// Scoring aliases for a resolution (empty when none are defined).
pub fn quality_aliases(quality: Quality) -> &'static [&'static str] {
    QUALITY_ALIASES
        .iter()
        .find(|(q, _)| *q == quality)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}
