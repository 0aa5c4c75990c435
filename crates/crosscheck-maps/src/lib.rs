//! Map-search crosschecking: page capability interface, candidate
//! extraction from scraped link/text formats, and the per-query verdict
//! orchestrator.
//!
//! The browser layer itself lives outside this workspace; everything here
//! runs against the [`page::SearchPage`] capabilities, so the whole
//! pipeline is exercisable offline through [`replay`] snapshots.

pub mod crosscheck;
pub mod extract;
pub mod page;
pub mod replay;

pub use crosscheck::{crosscheck_business, CrosscheckOptions};
pub use page::{PageError, PageSource, SearchPage};
pub use replay::{PageSnapshot, ReplayDir, ReplayPage};
