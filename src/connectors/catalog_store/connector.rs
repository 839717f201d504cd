use crate::connectors::errors::ConnectorError;
use crate::models::{Movie, Profile, Subscription, Tier, User, WatchlistEntry};

/// Table access against the backend store.
///
/// Calls that take a `User` run with the user's bearer token so that the
/// store's row-level security decides what is visible.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All tiers ordered by ascending price
    async fn list_tiers(&self) -> Result<Vec<Tier>, ConnectorError>;

    /// Movies ordered by descending rating, optionally only featured ones
    async fn list_movies(&self, featured_only: bool) -> Result<Vec<Movie>, ConnectorError>;

    /// The user's single `active` subscription, if any
    async fn get_active_subscription(
        &self,
        user: &User,
    ) -> Result<Option<Subscription>, ConnectorError>;

    async fn create_subscription(
        &self,
        user: &User,
        tier_id: &str,
    ) -> Result<Subscription, ConnectorError>;

    /// Move an existing subscription to another tier and stamp `updated_at`
    async fn update_subscription_tier(
        &self,
        user: &User,
        subscription_id: &str,
        tier_id: &str,
    ) -> Result<Subscription, ConnectorError>;

    async fn list_watchlist(&self, user: &User) -> Result<Vec<WatchlistEntry>, ConnectorError>;

    /// Insert the (user, movie) row; `Conflict` when it already exists
    async fn add_to_watchlist(&self, user: &User, movie_id: &str) -> Result<(), ConnectorError>;

    async fn remove_from_watchlist(
        &self,
        user: &User,
        movie_id: &str,
    ) -> Result<(), ConnectorError>;

    async fn get_profile(&self, user: &User) -> Result<Option<Profile>, ConnectorError>;
}
