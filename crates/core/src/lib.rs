pub mod config;
pub mod lookup;
pub mod matcher;
pub mod metrics;
pub mod signature;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, AddonConfig, Config, ConfigError,
    OmdbConfig, RealDebridConfig, SanitizedConfig, ServerConfig,
};
pub use lookup::{
    ActiveStream, DebridClient, LookupError, MovieTitle, OmdbClient, RealDebridClient,
    TitleLookup,
};
pub use matcher::{
    compose_label, rank, CandidateSubtitle, MatchTier, RankedSubtitle, Ranker, RankingConfig,
    ScoreBreakdown, Scorer,
};
pub use signature::{
    extract, resolve_target, DataSource, Quality, TargetConfig, TargetContext,
    TechnicalSignature, VideoSource,
};
