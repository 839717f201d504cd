use serde::Serialize;

use crate::connectors::{CatalogStore, ConnectorError};
use crate::models::User;
use crate::services::tier_access::{build_rank, TierRank};
use crate::services::watchlist::Watchlist;
use crate::views::MovieCard;

/// The browsing grid as one viewer sees it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogGrid {
    pub rank: TierRank,
    pub user_tier: Option<String>,
    pub cards: Vec<MovieCard>,
}

/// Tier id of the user's active subscription, if any.
pub async fn active_tier(store: &dyn CatalogStore, user: &User) -> Result<Option<String>, ConnectorError> {
    Ok(store
        .get_active_subscription(user)
        .await?
        .map(|subscription| subscription.tier_id))
}

/// Build the grid for `user` (or an anonymous viewer).
///
/// Tier and movie fetches must succeed. The subscription and watchlist
/// lookups fall back to "no tier" and "empty watchlist", so a failing lookup
/// only ever locks more content.
#[tracing::instrument(name = "Load catalog grid.", skip(store, user))]
pub async fn load_grid(
    store: &dyn CatalogStore,
    user: Option<&User>,
    featured: bool,
) -> Result<CatalogGrid, ConnectorError> {
    let tiers = store.list_tiers().await?;
    let rank = build_rank(&tiers);
    let movies = store.list_movies(featured).await?;

    let (user_tier, watchlist) = match user {
        Some(user) => {
            let tier = active_tier(store, user).await.unwrap_or_else(|err| {
                tracing::warn!("subscription lookup failed for {}: {}", user.id, err);
                None
            });
            let watchlist = Watchlist::load(store, user).await.unwrap_or_else(|err| {
                tracing::warn!("watchlist lookup failed for {}: {}", user.id, err);
                Watchlist::default()
            });
            (tier, watchlist)
        }
        None => (None, Watchlist::default()),
    };

    let signed_in = user.is_some();
    let cards = movies
        .into_iter()
        .map(|movie| {
            let open = rank.can_access(movie.required_tier.as_deref(), user_tier.as_deref());
            let in_watchlist = watchlist.contains(&movie.id);
            MovieCard::new(movie, open, in_watchlist, signed_in)
        })
        .collect();

    Ok(CatalogGrid {
        rank,
        user_tier,
        cards,
    })
}
