//! Splitting a raw business query into name and jurisdiction phrase.

use std::sync::LazyLock;

use regex::Regex;

static KABUPATEN_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+(Kabupaten\s+.+)$").expect("valid regex"));
static KOTA_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+(Kota\s+.+)$").expect("valid regex"));

/// A raw query split into the business name and its jurisdiction phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub name: String,
    /// `"Kabupaten X"` / `"Kota Y"` suffix of the query, or empty when the
    /// query carries no jurisdiction phrase.
    pub location: String,
}

/// Splits `query` on a trailing `Kabupaten …` / `Kota …` jurisdiction
/// phrase (case-insensitive, `Kabupaten` checked first). Without one, the
/// whole query is the name and the location is empty.
#[must_use]
pub fn parse_business_query(query: &str) -> ParsedQuery {
    for re in [&*KABUPATEN_SPLIT_RE, &*KOTA_SPLIT_RE] {
        if let Some(caps) = re.captures(query) {
            return ParsedQuery {
                name: caps[1].trim().to_owned(),
                location: caps[2].trim().to_owned(),
            };
        }
    }
    ParsedQuery {
        name: query.trim().to_owned(),
        location: String::new(),
    }
}
