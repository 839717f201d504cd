use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";

/// Row of `user_subscriptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub tier_id: String,
    pub status: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Insert payload; the store fills in id and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewSubscription {
    pub user_id: String,
    pub tier_id: String,
    pub status: String,
}

impl NewSubscription {
    pub fn active(user_id: &str, tier_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            tier_id: tier_id.to_string(),
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

/// Patch payload for switching an existing subscription to another tier.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionTierChange {
    pub tier_id: String,
    pub updated_at: DateTime<Utc>,
}
