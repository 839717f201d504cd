use crate::connectors::{CatalogStore, ConnectorError};
use crate::models::{Subscription, Tier, User};
use crate::services::tier_access::build_rank;
use crate::views::PlanOffer;

/// One offer per tier, keeping the ascending-price order of `tiers`.
pub fn plan_offers(tiers: &[Tier], current_tier: Option<&str>) -> Vec<PlanOffer> {
    let rank = build_rank(tiers);
    tiers
        .iter()
        .map(|tier| {
            let is_current = current_tier == Some(tier.id.as_str());
            let tier_rank = rank.get(&tier.id).unwrap_or_default();
            PlanOffer::new(tier.clone(), tier_rank, is_current)
        })
        .collect()
}

/// Move `user` onto `tier_id`.
///
/// Updates the active subscription when there is one and inserts a new
/// active row otherwise. Store failures are logged and returned to the
/// caller.
#[tracing::instrument(name = "Subscribe user to tier.", skip(store, user), fields(user_id = %user.id))]
pub async fn subscribe(
    store: &dyn CatalogStore,
    user: &User,
    tier_id: &str,
) -> Result<Subscription, ConnectorError> {
    let tiers = store.list_tiers().await?;
    if !tiers.iter().any(|tier| tier.id == tier_id) {
        return Err(ConnectorError::NotFound(format!("Tier {} not found", tier_id)));
    }

    let current = store.get_active_subscription(user).await.map_err(|err| {
        tracing::error!("Failed to read active subscription: {}", err);
        err
    })?;

    let stored = match current {
        Some(subscription) if subscription.tier_id == tier_id => {
            return Err(ConnectorError::Conflict(format!(
                "Already subscribed to {}",
                tier_id
            )));
        }
        Some(subscription) => {
            tracing::info!(
                "switching subscription {} from {} to {}",
                subscription.id,
                subscription.tier_id,
                tier_id
            );
            store
                .update_subscription_tier(user, &subscription.id, tier_id)
                .await
        }
        None => store.create_subscription(user, tier_id).await,
    };

    stored.map_err(|err| {
        tracing::error!("Failed to store subscription: {}", err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::catalog_store::mock::{tier, MockCatalogStore};
    use crate::models::STATUS_ACTIVE;
    use crate::services::catalog::load_grid;
    use crate::views::CallToAction;

    fn viewer() -> User {
        User {
            id: "user-1".to_string(),
            email: None,
            role: None,
            access_token: None,
        }
    }

    #[test]
    fn offers_carry_rank_and_call_to_action() {
        let tiers = vec![
            tier("free", "Free", 0.0),
            tier("basic", "Basic", 9.99),
            tier("premium", "Premium", 19.99),
        ];

        let offers = plan_offers(&tiers, Some("basic"));

        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0].call_to_action, CallToAction::SelectFreePlan);
        assert_eq!(offers[1].call_to_action, CallToAction::CurrentPlan);
        assert!(offers[1].is_current);
        assert_eq!(offers[2].call_to_action, CallToAction::UpgradeNow);
        assert_eq!(offers[2].label, "Upgrade Now");
        assert_eq!(offers[2].rank, 2);
        assert_eq!(offers[1].price_label, "$9.99");
    }

    #[test]
    fn premium_is_highlighted_by_name() {
        let tiers = vec![tier("t-1", "PREMIUM", 30.0), tier("t-2", "Family", 40.0)];

        let offers = plan_offers(&tiers, None);

        assert!(offers[0].is_highlighted);
        assert!(!offers[1].is_highlighted);
        assert!(offers.iter().all(|offer| !offer.is_current));
    }

    #[tokio::test]
    async fn first_subscription_is_inserted_as_active() {
        let store = MockCatalogStore::seeded();
        let user = viewer();

        let stored = subscribe(&store, &user, "basic").await.unwrap();

        assert_eq!(stored.tier_id, "basic");
        assert!(stored.is_active());
        assert_eq!(store.subscriptions_of(&user.id).await.len(), 1);
    }

    #[tokio::test]
    async fn existing_subscription_is_updated_in_place() {
        let store = MockCatalogStore::seeded();
        let user = viewer();
        let existing = store.put_subscription(&user.id, "basic", STATUS_ACTIVE).await;

        let stored = subscribe(&store, &user, "premium").await.unwrap();

        assert_eq!(stored.id, existing.id);
        assert_eq!(stored.tier_id, "premium");
        assert!(stored.updated_at >= existing.updated_at);
        assert_eq!(store.subscriptions_of(&user.id).await.len(), 1);
    }

    #[tokio::test]
    async fn upgrading_unlocks_premium_movies() {
        let store = MockCatalogStore::seeded();
        let user = viewer();
        store.put_subscription(&user.id, "basic", STATUS_ACTIVE).await;

        let before = load_grid(&store, Some(&user), false).await.unwrap();
        let harbor = before.cards.iter().find(|c| c.id == "m-glass-harbor").unwrap();
        assert!(harbor.locked);

        subscribe(&store, &user, "premium").await.unwrap();

        let after = load_grid(&store, Some(&user), false).await.unwrap();
        assert!(after.cards.iter().all(|card| !card.locked));
    }

    #[tokio::test]
    async fn unknown_tier_is_not_found() {
        let store = MockCatalogStore::seeded();

        let result = subscribe(&store, &viewer(), "platinum").await;

        assert!(matches!(result, Err(ConnectorError::NotFound(_))));
    }

    #[tokio::test]
    async fn current_tier_is_a_conflict() {
        let store = MockCatalogStore::seeded();
        let user = viewer();
        store.put_subscription(&user.id, "premium", STATUS_ACTIVE).await;

        let result = subscribe(&store, &user, "premium").await;

        assert!(matches!(result, Err(ConnectorError::Conflict(_))));
    }

    #[tokio::test]
    async fn failed_update_is_surfaced() {
        let store = MockCatalogStore::seeded().with_failing_writes();
        let user = viewer();
        store.put_subscription(&user.id, "basic", STATUS_ACTIVE).await;

        let result = subscribe(&store, &user, "premium").await;

        assert!(matches!(result, Err(ConnectorError::ServiceUnavailable(_))));
        assert_eq!(store.subscriptions_of(&user.id).await[0].tier_id, "basic");
    }
}
