mod client;
mod connector;
mod init;
pub mod mock;

pub use client::CatalogStoreClient;
pub use connector::CatalogStore;
pub use init::init;

pub const TIERS_TABLE: &str = "subscription_tiers";
pub const MOVIES_TABLE: &str = "movies";
pub const SUBSCRIPTIONS_TABLE: &str = "user_subscriptions";
pub const WATCHLIST_TABLE: &str = "user_watchlist";
pub const PROFILES_TABLE: &str = "profiles";
