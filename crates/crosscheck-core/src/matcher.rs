//! The two matching strategies of the crosscheck pipeline.
//!
//! List-view pages offer several competing candidates that were already
//! filtered by geography, so [`best_match`] ranks them and needs both
//! similarity scores to clear a floor. Profile pages offer exactly one
//! candidate and no coordinate to pre-filter on, so
//! [`validate_profile_match`] runs a name gate and then a stricter
//! location gate instead of ranking.

use std::sync::LazyLock;

use regex::Regex;

use crate::fuzzy::{partial_ratio, ratio};
use crate::types::{Candidate, MatchResult, MatchStatus};

static JURISDICTION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:Kabupaten|Kota)\s+").expect("valid regex"));

/// Score floors for both strategies. The defaults are deliberately
/// asymmetric: list candidates must clear both floors (`AND`) because the
/// best score then ranks them, while profile gates pass on either score
/// (`OR`) but must pass twice (name, then location).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    pub list_min_ratio: u32,
    pub list_min_partial: u32,
    pub profile_name_min_ratio: u32,
    pub profile_name_min_partial: u32,
    pub profile_location_min_ratio: u32,
    pub profile_location_min_partial: u32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            list_min_ratio: 70,
            list_min_partial: 85,
            profile_name_min_ratio: 70,
            profile_name_min_partial: 80,
            profile_location_min_ratio: 75,
            profile_location_min_partial: 90,
        }
    }
}

/// Picks the best candidate for `query_name` from a list-view result set.
///
/// The configured `region_phrase` (e.g. `"Kabupaten Pasaman"`) is stripped
/// from `query_name` before comparison so a jurisdiction suffix left in the
/// query cannot drag the name scores down. A candidate is eligible only
/// when `ratio >= list_min_ratio` and `partial >= list_min_partial`; among
/// eligible candidates the highest `max(ratio, partial)` wins, with ties
/// going to the earliest candidate in input order. Nameless candidates are
/// skipped. Returns `None` when nothing is eligible.
#[must_use]
pub fn best_match(
    query_name: &str,
    candidates: &[Candidate],
    region_phrase: &str,
    thresholds: &MatchThresholds,
) -> Option<MatchResult> {
    let query = strip_region_phrase(query_name, region_phrase);
    let mut best: Option<MatchResult> = None;

    for candidate in candidates {
        let Some(name) = candidate.name.as_deref() else {
            continue;
        };

        let ratio_score = ratio(&query, name);
        let partial_score = partial_ratio(&query, name);
        let score = ratio_score.max(partial_score);
        tracing::debug!(
            candidate = name,
            ratio = ratio_score,
            partial = partial_score,
            "scored list-view candidate"
        );

        let eligible = ratio_score >= thresholds.list_min_ratio
            && partial_score >= thresholds.list_min_partial;
        // Strict > keeps the first-encountered candidate on tied scores.
        if eligible && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(MatchResult {
                name: name.to_owned(),
                coordinate: candidate.coordinate,
                ratio: ratio_score,
                partial: partial_score,
                score,
                status: MatchStatus::Found,
            });
        }
    }

    best
}

/// Validates the single candidate of a profile page against the query.
///
/// Two gates in sequence:
/// 1. name: `ratio >= profile_name_min_ratio` or
///    `partial >= profile_name_min_partial`; a failed or empty name is
///    final — the location is never consulted.
/// 2. location: after stripping a leading `Kabupaten `/`Kota ` prefix from
///    both sides, `ratio >= profile_location_min_ratio` or
///    `partial >= profile_location_min_partial`. Missing location data on
///    either side fails the gate rather than assuming a match.
#[must_use]
pub fn validate_profile_match(
    business_name: &str,
    compared_name: &str,
    business_location: &str,
    compared_location: &str,
    thresholds: &MatchThresholds,
) -> bool {
    if business_name.is_empty() || compared_name.is_empty() {
        return false;
    }

    let name_ratio = ratio(business_name, compared_name);
    let name_partial = partial_ratio(business_name, compared_name);
    tracing::debug!(
        business_name,
        compared_name,
        ratio = name_ratio,
        partial = name_partial,
        "profile name gate"
    );
    if name_ratio < thresholds.profile_name_min_ratio
        && name_partial < thresholds.profile_name_min_partial
    {
        return false;
    }

    if business_location.is_empty() || compared_location.is_empty() {
        tracing::debug!(
            business_name,
            business_location,
            compared_location,
            "profile location data incomplete — cannot confirm match"
        );
        return false;
    }

    let clean_business = strip_jurisdiction_prefix(business_location);
    let clean_compared = strip_jurisdiction_prefix(compared_location);
    if clean_business.is_empty() || clean_compared.is_empty() {
        return false;
    }

    let loc_ratio = ratio(&clean_business, &clean_compared);
    let loc_partial = partial_ratio(&clean_business, &clean_compared);
    tracing::debug!(
        business_location = %clean_business,
        compared_location = %clean_compared,
        ratio = loc_ratio,
        partial = loc_partial,
        "profile location gate"
    );
    loc_ratio >= thresholds.profile_location_min_ratio
        || loc_partial >= thresholds.profile_location_min_partial
}

/// Removes an embedded occurrence of `phrase` (case-insensitive, tolerant
/// of extra internal whitespace) from `name`.
fn strip_region_phrase(name: &str, phrase: &str) -> String {
    let escaped = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    if escaped.is_empty() {
        return name.trim().to_owned();
    }
    let re = Regex::new(&format!(r"(?i)\s*{escaped}\s*")).expect("valid regex");
    re.replace_all(name, " ").trim().to_owned()
}

fn strip_jurisdiction_prefix(location: &str) -> String {
    JURISDICTION_PREFIX_RE
        .replace(location.trim(), "")
        .trim()
        .to_owned()
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
