use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `user_watchlist`; unique per (user_id, movie_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub movie_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl WatchlistEntry {
    pub fn new(user_id: &str, movie_id: &str) -> Self {
        Self {
            id: None,
            user_id: user_id.to_string(),
            movie_id: movie_id.to_string(),
            added_at: None,
        }
    }
}
