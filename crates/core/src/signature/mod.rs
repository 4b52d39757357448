//! Technical signatures of video releases.
//!
//! A signature captures what matters for subtitle timing compatibility:
//! source (bluray, web-dl, cam, ...), resolution, codec, audio, release
//! group and special edition. Signatures come from three places:
//!
//! - [`extract`] parses any free-text release name or title
//! - [`SizeEstimator`] infers the source from file size and runtime
//! - [`resolve_target`] picks the best of the above for the video being played

mod estimate;
mod extract;
mod target;
mod types;
pub mod version_text;
pub mod vocab;

pub use estimate::{estimate_from_size, SizeEstimate, SizeEstimateConfig, SizeEstimator};
pub use extract::{
    detect_audio, detect_codec, detect_quality, detect_release_group, detect_source,
    detect_special_edition, extract, DEFAULT_TITLE_GUESS_CONFIDENCE,
};
pub use target::{resolve_target, TargetConfig, TargetContext};
pub use types::*;
pub use version_text::{clean_version_text, find_version_string};
