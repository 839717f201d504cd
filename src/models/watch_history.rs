use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Declared by the backend schema; nothing reads or writes it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchHistory {
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub progress_seconds: i64,
    pub completed: bool,
    pub last_watched: DateTime<Utc>,
}
