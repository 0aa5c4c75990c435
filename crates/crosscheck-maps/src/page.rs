//! Capability interface to the page/browser collaborator.
//!
//! The orchestrator needs exactly these operations from a search-results
//! page, independent of how they are implemented. Production runs use the
//! [`crate::replay`] snapshot source; tests use small in-memory fakes.

use thiserror::Error;

/// Failures raised by a page implementation. All of them are recovered at
/// the orchestrator branch level — one query's page trouble never aborts
/// the batch.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no element matches selector {selector:?}")]
    MissingElement { selector: String },

    #[error("page navigation failed: {0}")]
    Navigation(String),

    #[error("snapshot for query {query:?} could not be read: {source}")]
    Snapshot {
        query: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot for query {query:?} is malformed: {source}")]
    SnapshotFormat {
        query: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A fetched map-search page.
///
/// `heading_text` and `text` distinguish "element absent" (`Ok(None)`)
/// from "page interaction failed" (`Err`); the orchestrator tolerates
/// both but logs them differently.
#[allow(async_fn_in_trait)]
pub trait SearchPage {
    /// The page's `h1` heading, used to tell list views from profile views.
    async fn heading_text(&self) -> Result<Option<String>, PageError>;

    /// `href` attributes of anchors matching `selector`, in DOM order.
    async fn anchor_hrefs(&self, selector: &str) -> Result<Vec<String>, PageError>;

    /// Text content of the first element matching `selector`.
    async fn text(&self, selector: &str) -> Result<Option<String>, PageError>;

    /// The browser's current address, which moves from the search URL to a
    /// place URL once a profile page redirect settles.
    async fn current_address(&self) -> Result<String, PageError>;

    /// The embedded app-state JSON blob of the page.
    async fn raw_payload(&self) -> Result<String, PageError>;
}

/// Provider of search pages for queries.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    type Page: SearchPage;

    async fn fetch_search_page(&self, query: &str) -> Result<Self::Page, PageError>;
}
