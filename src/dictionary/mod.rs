//! Dictionary browsing, search and community contributions.

pub mod service;

use serde::{Deserialize, Serialize};

use crate::models::DictionaryEntry;

pub use service::DictionaryService;

/// Most results a search returns.
pub const SEARCH_LIMIT: usize = 50;

/// Entries returned by the recent listing unless a limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Upper bound for a caller-supplied recent limit.
pub const MAX_RECENT_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// Returned after a successful contribution.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContributionResponse {
    pub message: String,
    pub word: DictionaryEntry,
}
