pub mod app_config;
pub mod config;
pub mod fuzzy;
pub mod matcher;
pub mod query;
pub mod region;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use matcher::{best_match, validate_profile_match, MatchThresholds};
pub use query::{parse_business_query, ParsedQuery};
pub use region::{GeometryError, Region};
pub use types::{Candidate, Coordinate, MatchResult, MatchStatus, VerdictRecord};
