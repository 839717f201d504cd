use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `movies`. `required_tier` is a tier id; `None` marks free content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub release_year: i32,
    pub duration_minutes: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub backdrop_url: String,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub required_tier: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Movie {
    pub fn is_gated(&self) -> bool {
        self.required_tier.is_some()
    }
}
