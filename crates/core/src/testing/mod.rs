//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external collaborator
//! traits, allowing ranking flows to be tested without real services.
//!
//! # Example
//!
//! ```rust,ignore
//! use titulky_core::testing::{fixtures, MockDebridClient, MockTitleLookup};
//!
//! let lookup = MockTitleLookup::new();
//! lookup.add_title("tt1375666", fixtures::movie_title("Inception", "2010")).await;
//!
//! let debrid = MockDebridClient::new();
//! debrid.set_stream(Some(fixtures::active_stream("Inception.2010.1080p.BluRay.mkv", 10_000_000_000))).await;
//!
//! // Use in AppState...
//! ```

mod mock_debrid;
mod mock_title_lookup;

pub use mock_debrid::MockDebridClient;
pub use mock_title_lookup::MockTitleLookup;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::lookup::{ActiveStream, MovieTitle};
    use crate::matcher::CandidateSubtitle;
    use crate::signature::{extract, DataSource, TechnicalSignature};

    /// Create a candidate with a plain title.
    pub fn candidate(id: &str, title: &str, popularity: u64) -> CandidateSubtitle {
        CandidateSubtitle::new(id, title, popularity).with_language("cs")
    }

    /// Create a candidate whose detail page listed a release name.
    pub fn candidate_with_version(
        id: &str,
        title: &str,
        version: &str,
        popularity: u64,
    ) -> CandidateSubtitle {
        candidate(id, title, popularity).with_version_text(version)
    }

    /// Signature parsed from a real filename, as the debrid path produces.
    pub fn explicit_target(filename: &str) -> TechnicalSignature {
        let mut signature = extract(filename);
        signature.confidence = 95;
        signature.data_source = DataSource::ExplicitMetadata;
        signature
    }

    /// Create a movie title.
    pub fn movie_title(title: &str, year: &str) -> MovieTitle {
        MovieTitle {
            title: title.to_string(),
            year: Some(year.to_string()),
            kind: Some("movie".to_string()),
        }
    }

    /// Create an active debrid stream.
    pub fn active_stream(filename: &str, size_bytes: u64) -> ActiveStream {
        ActiveStream {
            filename: filename.to_string(),
            size_bytes: Some(size_bytes),
        }
    }

    /// A realistic search result page for "Inception".
    pub fn inception_candidates() -> Vec<CandidateSubtitle> {
        vec![
            candidate_with_version(
                "101",
                "Inception",
                "Inception.2010.1080p.BluRay.x264-SPARKS",
                340,
            ),
            candidate_with_version("102", "Inception", "Inception.2010.720p.WEB-DL.H264", 1250),
            candidate("103", "Inception CAM", 9000),
            candidate("104", "Inception 2010 BDRip", 80),
            candidate("105", "Inception 2", 15),
        ]
    }
}
