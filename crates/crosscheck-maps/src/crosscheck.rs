//! Per-query verdict orchestration.
//!
//! One invocation per input query: fetch the search page, decide between
//! the list-view and profile-view handling paths, and produce exactly one
//! [`VerdictRecord`]. Page failures are swallowed at this level — a query
//! that cannot be resolved becomes a `found = false` record instead of
//! aborting the batch.

use std::time::Duration;

use crosscheck_core::{
    best_match, parse_business_query, validate_profile_match, Candidate, MatchThresholds,
    ParsedQuery, Region, VerdictRecord,
};

use crate::extract::{
    candidates_from_links, coordinate_from_url, name_and_location_from_payload,
    profile_location_from_address,
};
use crate::page::{PageError, PageSource, SearchPage};

/// Anchor selector for result entries in the list-view feed.
const FEED_LINKS_SELECTOR: &str = r#"[role="feed"] > div > div > a"#;

/// Selector of the address line on a profile page.
const ADDRESS_SELECTOR: &str = "div.Io6YTe.fontBodyMedium.kR99db.fdkmkc";

/// While the current address still contains this placeholder, the profile
/// page has not yet redirected to its place URL.
const SEARCH_URL_MARKER: &str = "https://www.google.com/maps/search";

/// Tunables for one orchestrator run. Defaults mirror the production
/// configuration: 5 list candidates, 10 one-second redirect polls.
#[derive(Debug, Clone)]
pub struct CrosscheckOptions {
    pub max_list_candidates: usize,
    pub redirect_poll_attempts: u32,
    pub redirect_poll_interval: Duration,
    /// Jurisdiction phrase stripped from query names before list matching.
    pub region_phrase: String,
    pub thresholds: MatchThresholds,
}

impl Default for CrosscheckOptions {
    fn default() -> Self {
        Self {
            max_list_candidates: 5,
            redirect_poll_attempts: 10,
            redirect_poll_interval: Duration::from_secs(1),
            region_phrase: "Kabupaten Pasaman".to_owned(),
            thresholds: MatchThresholds::default(),
        }
    }
}

enum PageKind {
    ListView,
    /// Profile pages carry the candidate name in the heading.
    ProfileView { compared_name: String },
}

/// Resolves one query to its final verdict. Never fails: any page-layer
/// error on the way is logged and mapped to a not-found verdict for this
/// query alone.
pub async fn crosscheck_business<S: PageSource>(
    source: &S,
    query: &str,
    region: &Region,
    options: &CrosscheckOptions,
) -> VerdictRecord {
    let parsed = parse_business_query(query);
    match resolve(source, query, &parsed, region, options).await {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(query, error = %err, "crosscheck failed — recording as not found");
            VerdictRecord::not_found(parsed.name, query)
        }
    }
}

async fn resolve<S: PageSource>(
    source: &S,
    query: &str,
    parsed: &ParsedQuery,
    region: &Region,
    options: &CrosscheckOptions,
) -> Result<VerdictRecord, PageError> {
    let page = source.fetch_search_page(query).await?;

    match detect_page_kind(&page).await {
        PageKind::ListView => resolve_list_view(&page, query, parsed, region, options).await,
        PageKind::ProfileView { compared_name } => {
            resolve_profile_view(&page, query, parsed, compared_name, options).await
        }
    }
}

/// A heading containing "hasil"/"results" — or no readable heading at
/// all — marks a list of results; any other heading is the name of the
/// single entity on a profile page.
async fn detect_page_kind<P: SearchPage>(page: &P) -> PageKind {
    match page.heading_text().await {
        Ok(Some(heading)) => {
            let lower = heading.to_lowercase();
            if lower.contains("hasil") || lower.contains("results") {
                PageKind::ListView
            } else {
                PageKind::ProfileView {
                    compared_name: heading,
                }
            }
        }
        Ok(None) => PageKind::ListView,
        Err(err) => {
            tracing::debug!(error = %err, "heading not readable — treating page as list view");
            PageKind::ListView
        }
    }
}

async fn resolve_list_view<P: SearchPage>(
    page: &P,
    query: &str,
    parsed: &ParsedQuery,
    region: &Region,
    options: &CrosscheckOptions,
) -> Result<VerdictRecord, PageError> {
    let mut links = page.anchor_hrefs(FEED_LINKS_SELECTOR).await?;
    links.truncate(options.max_list_candidates);

    if links.is_empty() {
        tracing::info!(query, "list view has no result links");
        return Ok(VerdictRecord::not_found(parsed.name.clone(), query));
    }

    let candidates = candidates_from_links(&links);
    let in_region: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| {
            // Fail closed: no coordinate means not in region.
            candidate
                .coordinate
                .is_some_and(|coordinate| region.covers(coordinate))
        })
        .collect();
    tracing::debug!(
        query,
        considered = links.len(),
        in_region = in_region.len(),
        "filtered list candidates by region"
    );

    match best_match(
        &parsed.name,
        &in_region,
        &options.region_phrase,
        &options.thresholds,
    ) {
        Some(matched) => {
            tracing::info!(query, matched = %matched.name, score = matched.score, "list-view match");
            Ok(VerdictRecord {
                business_name: parsed.name.clone(),
                query: query.to_owned(),
                found: true,
                latitude: matched.coordinate.map(|c| c.lat),
                longitude: matched.coordinate.map(|c| c.lon),
            })
        }
        None => Ok(VerdictRecord::not_found(parsed.name.clone(), query)),
    }
}

async fn resolve_profile_view<P: SearchPage>(
    page: &P,
    query: &str,
    parsed: &ParsedQuery,
    mut compared_name: String,
    options: &CrosscheckOptions,
) -> Result<VerdictRecord, PageError> {
    let address_text = match page.text(ADDRESS_SELECTOR).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(query, error = %err, "profile address element missing");
            None
        }
    };

    let mut compared_location = address_text
        .as_deref()
        .and_then(profile_location_from_address);

    // The embedded app-state record backs up whatever the DOM did not
    // provide.
    if compared_location.is_none() {
        if let Ok(payload) = page.raw_payload().await {
            let (payload_name, payload_location) = name_and_location_from_payload(&payload);
            if compared_name.is_empty() {
                if let Some(name) = payload_name {
                    compared_name = name;
                }
            }
            compared_location = payload_location;
        }
    }

    let found = validate_profile_match(
        &parsed.name,
        &compared_name,
        &parsed.location,
        compared_location.as_deref().unwrap_or(""),
        &options.thresholds,
    );

    let address = await_profile_redirect(page, query, options).await?;
    let coordinate = coordinate_from_url(&address);
    if coordinate.is_none() {
        tracing::debug!(query, address, "profile address carries no coordinate");
    }

    Ok(VerdictRecord {
        business_name: parsed.name.clone(),
        query: query.to_owned(),
        found,
        latitude: coordinate.map(|c| c.lat),
        longitude: coordinate.map(|c| c.lon),
    })
}

/// Polls the page address until it leaves the search placeholder or the
/// attempt budget expires, then returns whatever address is current. The
/// wait is bounded and non-cancelable; an unresolved redirect simply
/// yields an address without a coordinate.
async fn await_profile_redirect<P: SearchPage>(
    page: &P,
    query: &str,
    options: &CrosscheckOptions,
) -> Result<String, PageError> {
    let mut address = page.current_address().await?;
    let mut waited = 0;

    while address.contains(SEARCH_URL_MARKER) && waited < options.redirect_poll_attempts {
        tokio::time::sleep(options.redirect_poll_interval).await;
        waited += 1;
        tracing::debug!(query, waited, "waiting for profile redirect");
        address = page.current_address().await?;
    }

    Ok(address)
}

#[cfg(test)]
#[path = "crosscheck_test.rs"]
mod tests;
