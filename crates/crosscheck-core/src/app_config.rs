use std::path::PathBuf;

/// Process-wide configuration, read once at startup from `CROSSCHECK_*`
/// environment variables (see [`crate::config::load_app_config`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path to the GeoJSON region boundary. Required.
    pub region_path: PathBuf,
    /// Jurisdiction phrase stripped from query names before list-view
    /// matching, e.g. `"Kabupaten Pasaman"`.
    pub region_phrase: String,
    pub log_level: String,
    /// How many list-view result links to consider per query.
    pub max_list_candidates: usize,
    /// Maximum number of redirect polls on a profile page.
    pub redirect_poll_attempts: u32,
    /// Seconds between redirect polls.
    pub redirect_poll_interval_secs: u64,
}
