pub mod movie_card;
pub mod plan_offer;
pub mod session;

pub use movie_card::*;
pub use plan_offer::*;
pub use session::*;
