use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `subscription_tiers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub max_quality: String,
    #[serde(default)]
    pub max_devices: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Tier {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}
