pub mod catalog;
pub mod session;
pub mod subscription;
pub mod tier_access;
pub mod watchlist;

pub use catalog::{load_grid, CatalogGrid};
pub use session::session;
pub use subscription::{plan_offers, subscribe};
pub use tier_access::{build_rank, can_access, TierRank};
pub use watchlist::{toggle_membership, Watchlist};
