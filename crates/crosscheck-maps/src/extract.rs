//! Extraction of structured data from scraped map-page formats.
//!
//! All extractors are pure and total: malformed input yields `None` (or an
//! empty candidate field), never an error. Absence of a value is a valid
//! state that downstream matching and filtering handle explicitly.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crosscheck_core::{Candidate, Coordinate};

/// Index of the record that carries `"<name> · <address>"` inside the
/// page's embedded app-state array, and the item index within it. This is
/// a versioned offset into an undocumented page format — when the upstream
/// layout shifts, these two constants are the single point of change.
const APP_STATE_RECORD_INDEX: usize = 9;
const APP_STATE_RECORD_ITEM: usize = 0;

/// Separator between the name part and the address part of the app-state
/// record.
const NAME_ADDRESS_SEPARATOR: char = '·';

const APP_STATE_START_MARKER: &str = ";window.APP_INITIALIZATION_STATE=";
const APP_STATE_END_MARKER: &str = ";window.APP_FLAGS";

static PLACE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/place/([^/]+)/data").expect("valid regex"));
static LAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!3d(-?[0-9.]+)").expect("valid regex"));
static LON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!4d(-?[0-9.]+)").expect("valid regex"));
static URL_COORDINATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").expect("valid regex"));
static JURISDICTION_IN_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Kabupaten|Kota)\s+([^,]+)").expect("valid regex"));
static ENGLISH_JURISDICTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([^,]+?)\s+(?:Regency|City)").expect("valid regex"));

/// Extracts one [`Candidate`] per result link.
///
/// Each link is percent-decoded first. The name comes from the
/// `/place/<name>/data` path segment with `+` normalized to space; the
/// coordinate from the `!3d<lat>` / `!4d<lon>` markers. A link missing
/// either marker still yields a candidate with the corresponding field
/// absent — filtering happens during matching, not extraction.
#[must_use]
pub fn candidates_from_links<S: AsRef<str>>(links: &[S]) -> Vec<Candidate> {
    links
        .iter()
        .map(|link| candidate_from_link(link.as_ref()))
        .collect()
}

fn candidate_from_link(link: &str) -> Candidate {
    let decoded = percent_decode_str(link).decode_utf8_lossy();

    let name = PLACE_NAME_RE
        .captures(&decoded)
        .map(|caps| caps[1].replace('+', " "));

    let lat = LAT_RE
        .captures(&decoded)
        .and_then(|caps| caps[1].parse::<f64>().ok());
    let lon = LON_RE
        .captures(&decoded)
        .and_then(|caps| caps[1].parse::<f64>().ok());

    // Latitude and longitude only count as a coordinate together.
    let coordinate = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinate { lat, lon }),
        _ => None,
    };

    if name.is_none() {
        tracing::debug!(link, "result link has no place-name segment");
    }

    Candidate { name, coordinate }
}

/// Pulls the `window.APP_INITIALIZATION_STATE` JSON blob out of a full
/// HTML document. Callers that already hold the blob can skip this.
#[must_use]
pub fn app_state_blob(html: &str) -> Option<&str> {
    let start = html.find(APP_STATE_START_MARKER)? + APP_STATE_START_MARKER.len();
    let end = html[start..].find(APP_STATE_END_MARKER)? + start;
    Some(&html[start..end])
}

/// Extracts `(name, location)` from the embedded app-state payload of a
/// profile page.
///
/// The relevant record sits at [`APP_STATE_RECORD_INDEX`] /
/// [`APP_STATE_RECORD_ITEM`] and reads `"<name> · <address>"`. The
/// location is the `Kabupaten`/`Kota` phrase inside the address part, up
/// to the next comma. Every parse failure — bad JSON, short array,
/// missing separator — yields `(None, None)`.
#[must_use]
pub fn name_and_location_from_payload(payload: &str) -> (Option<String>, Option<String>) {
    let Some(record) = app_state_record(payload) else {
        tracing::debug!("app-state payload has no name/address record");
        return (None, None);
    };

    let Some((name_part, address_part)) = record.split_once(NAME_ADDRESS_SEPARATOR) else {
        return (None, None);
    };

    let name = Some(name_part.trim().to_owned()).filter(|n| !n.is_empty());
    let location = JURISDICTION_IN_ADDRESS_RE
        .captures(address_part)
        .map(|caps| format!("{} {}", caps[1].trim(), caps[2].trim()));

    (name, location)
}

fn app_state_record(payload: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(payload).ok()?;
    value
        .get(APP_STATE_RECORD_INDEX)?
        .get(APP_STATE_RECORD_ITEM)?
        .as_str()
        .map(str::to_owned)
}

/// Extracts the `@<lat>,<lon>` coordinate from a map URL. Both components
/// or nothing.
#[must_use]
pub fn coordinate_from_url(url: &str) -> Option<Coordinate> {
    let caps = URL_COORDINATE_RE.captures(url)?;
    let lat = caps[1].parse::<f64>().ok()?;
    let lon = caps[2].parse::<f64>().ok()?;
    Some(Coordinate { lat, lon })
}

/// Derives a normalized `"Kabupaten <name>"` jurisdiction phrase from a
/// profile page's address line.
///
/// Tries the English form first (`"Pasaman Regency"` / `"Padang City"`),
/// then the Indonesian form (`"Kabupaten Pasaman"`). Either way the result
/// is normalized to a `Kabupaten `-prefixed phrase for the location gate.
#[must_use]
pub fn profile_location_from_address(address_text: &str) -> Option<String> {
    let name = ENGLISH_JURISDICTION_RE
        .captures(address_text)
        .map(|caps| caps[1].trim().to_owned())
        .or_else(|| {
            JURISDICTION_IN_ADDRESS_RE
                .captures(address_text)
                .map(|caps| caps[2].trim().to_owned())
        })?;
    Some(format!("Kabupaten {name}"))
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
