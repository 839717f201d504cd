use crate::models;
use serde::Serialize;

/// Tier name that gets the "most popular" highlight
pub const HIGHLIGHTED_TIER: &str = "premium";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    CurrentPlan,
    SelectFreePlan,
    UpgradeNow,
}

impl CallToAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CurrentPlan => "Current Plan",
            Self::SelectFreePlan => "Select Free Plan",
            Self::UpgradeNow => "Upgrade Now",
        }
    }
}

/// A tier as listed in the upsell flow.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOffer {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_label: String,
    pub features: Vec<String>,
    pub max_quality: String,
    pub max_devices: i32,
    pub rank: i64,
    pub is_current: bool,
    pub is_highlighted: bool,
    pub call_to_action: CallToAction,
    pub label: &'static str,
}

impl PlanOffer {
    pub fn new(tier: models::Tier, rank: i64, is_current: bool) -> Self {
        let call_to_action = if is_current {
            CallToAction::CurrentPlan
        } else if tier.is_free() {
            CallToAction::SelectFreePlan
        } else {
            CallToAction::UpgradeNow
        };

        Self {
            price_label: format!("${:.2}", tier.price),
            is_highlighted: tier.name.eq_ignore_ascii_case(HIGHLIGHTED_TIER),
            id: tier.id,
            name: tier.name,
            description: tier.description,
            price: tier.price,
            features: tier.features,
            max_quality: tier.max_quality,
            max_devices: tier.max_devices,
            rank,
            is_current,
            call_to_action,
            label: call_to_action.label(),
        }
    }
}
