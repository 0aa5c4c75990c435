//! Offline page source backed by captured snapshots.
//!
//! A snapshot is one JSON file per query holding everything the
//! orchestrator can ask a page for. The `addresses` list is replayed one
//! entry per [`SearchPage::current_address`] call (the last entry
//! repeats), which models the search-to-place redirect the profile path
//! polls on. Used by the CLI for cached runs and by integration tests.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::page::{PageError, PageSource, SearchPage};

/// Captured state of one fetched search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// The page's `h1` text, absent on pages without a heading.
    #[serde(default)]
    pub heading: Option<String>,
    /// Result-entry hrefs, in DOM order.
    #[serde(default)]
    pub links: Vec<String>,
    /// Text of the profile address line.
    #[serde(default)]
    pub address_text: Option<String>,
    /// The embedded app-state JSON blob.
    #[serde(default)]
    pub payload: Option<String>,
    /// Browser addresses in observation order; replayed one per
    /// `current_address` call, final entry repeating.
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// A [`SearchPage`] that answers from a [`PageSnapshot`].
#[derive(Debug)]
pub struct ReplayPage {
    snapshot: PageSnapshot,
    address_cursor: Mutex<usize>,
}

impl ReplayPage {
    #[must_use]
    pub fn new(snapshot: PageSnapshot) -> Self {
        Self {
            snapshot,
            address_cursor: Mutex::new(0),
        }
    }
}

impl SearchPage for ReplayPage {
    async fn heading_text(&self) -> Result<Option<String>, PageError> {
        Ok(self.snapshot.heading.clone())
    }

    async fn anchor_hrefs(&self, _selector: &str) -> Result<Vec<String>, PageError> {
        Ok(self.snapshot.links.clone())
    }

    async fn text(&self, _selector: &str) -> Result<Option<String>, PageError> {
        Ok(self.snapshot.address_text.clone())
    }

    async fn current_address(&self) -> Result<String, PageError> {
        let mut cursor = self
            .address_cursor
            .lock()
            .map_err(|_| PageError::Navigation("address cursor poisoned".to_owned()))?;
        let Some(address) = self
            .snapshot
            .addresses
            .get((*cursor).min(self.snapshot.addresses.len().saturating_sub(1)))
        else {
            return Err(PageError::Navigation(
                "snapshot records no addresses".to_owned(),
            ));
        };
        *cursor += 1;
        Ok(address.clone())
    }

    async fn raw_payload(&self) -> Result<String, PageError> {
        self.snapshot
            .payload
            .clone()
            .ok_or_else(|| PageError::MissingElement {
                selector: "APP_INITIALIZATION_STATE".to_owned(),
            })
    }
}

/// A [`PageSource`] reading `<query-slug>.json` snapshots from a directory.
#[derive(Debug, Clone)]
pub struct ReplayDir {
    dir: PathBuf,
}

impl ReplayDir {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The snapshot path a query resolves to.
    #[must_use]
    pub fn snapshot_path(&self, query: &str) -> PathBuf {
        self.dir.join(format!("{}.json", query_slug(query)))
    }
}

impl PageSource for ReplayDir {
    type Page = ReplayPage;

    async fn fetch_search_page(&self, query: &str) -> Result<Self::Page, PageError> {
        let path = self.snapshot_path(query);
        let contents = std::fs::read_to_string(&path).map_err(|e| PageError::Snapshot {
            query: query.to_owned(),
            source: e,
        })?;
        let snapshot: PageSnapshot =
            serde_json::from_str(&contents).map_err(|e| PageError::SnapshotFormat {
                query: query.to_owned(),
                source: e,
            })?;
        tracing::debug!(query, path = %path.display(), "loaded page snapshot");
        Ok(ReplayPage::new(snapshot))
    }
}

/// File-name-safe slug for a query: lowercased, alphanumerics kept,
/// everything else collapsed to single dashes.
#[must_use]
pub fn query_slug(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
