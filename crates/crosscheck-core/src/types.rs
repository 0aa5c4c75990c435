//! Domain types shared across the crosscheck pipeline.

use serde::{Deserialize, Serialize};

/// A decimal-degree coordinate pair.
///
/// Latitude and longitude travel together: a candidate either has a full
/// coordinate or none at all (`Option<Coordinate>`), never half of one.
/// Longitude/latitude order matters downstream — [`crate::region::Region`]
/// builds its test point longitude-first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A scraped map entity under consideration for a query.
///
/// Either field may be absent when extraction fails; absence is a valid
/// state, not an error. Nameless candidates are emitted by extraction and
/// filtered by the matcher, coordinate-less candidates by the region filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: Option<String>,
    pub coordinate: Option<Coordinate>,
}

/// Outcome classification of a successful match. A [`MatchResult`] only
/// exists for candidates that cleared both thresholds, so `Found` is the
/// only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Found,
}

/// The winning candidate from a list-view match, with its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub coordinate: Option<Coordinate>,
    /// Whole-string similarity, 0–100.
    pub ratio: u32,
    /// Best-substring similarity, 0–100.
    pub partial: u32,
    /// `max(ratio, partial)` — the ranking key among eligible candidates.
    pub score: u32,
    pub status: MatchStatus,
}

/// Final per-query verdict, created once by the orchestrator and consumed
/// by the report writer. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub business_name: String,
    pub query: String,
    pub found: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl VerdictRecord {
    /// A `found = false` verdict with no coordinates — the fallback for
    /// empty result pages, failed matches, and recovered page errors.
    #[must_use]
    pub fn not_found(business_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            query: query.into(),
            found: false,
            latitude: None,
            longitude: None,
        }
    }
}
