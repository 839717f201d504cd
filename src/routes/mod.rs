pub mod health_checks;
pub mod movies;
pub mod session;
pub mod subscription;
pub mod tiers;
pub mod watchlist;

pub use health_checks::*;
