//! Matcher - scoring and ranking of subtitle candidates.
//!
//! Given the signature of the video being played and a list of subtitle
//! search results, the matcher decides which subtitles are most likely to be
//! timed for that exact release.
//!
//! # Pipeline
//!
//! ```text
//!  CandidateSubtitle ──► extract() ──► TechnicalSignature ─┐
//!                                                          ▼
//!  target TechnicalSignature ─────────────────────► Scorer::score()
//!                                                          │
//!                                      edition_bonus() ◄───┤
//!                                                          ▼
//!                                     Ranker::rank() ──► Vec<RankedSubtitle>
//!                                                          │
//!                                                          ▼
//!                                                   compose_label()
//! ```
//!
//! # Scoring
//!
//! | Dimension     | Weight | Confidence-scaled |
//! |---------------|--------|-------------------|
//! | source        | 0.40   | yes               |
//! | quality       | 0.25   | yes               |
//! | codec         | 0.15   | yes               |
//! | release group | 0.10   | no                |
//! | title         | 0.10   | no                |
//!
//! Explicit target metadata earns a flat bonus on top. Special editions add
//! a separate bonus after the total is clamped.

mod config;
mod edition;
mod label;
mod ranker;
mod scorer;
mod title;
mod types;

pub use config::{RankingConfig, ScoreWeights};
pub use edition::edition_bonus;
pub use label::{compose_label, MatchTier};
pub use ranker::{rank, Ranker};
pub use scorer::{score, source_compatibility, Scorer};
pub use title::{has_sequel_markers, normalize_title, title_similarity};
pub use types::{CandidateSubtitle, RankedSubtitle, ScoreBreakdown};
