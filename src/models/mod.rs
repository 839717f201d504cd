mod movie;
mod profile;
mod subscription;
mod tier;
pub mod user;
mod viewer;
mod watch_history;
mod watchlist;

pub use movie::*;
pub use profile::*;
pub use subscription::*;
pub use tier::*;
pub use user::*;
pub use viewer::*;
pub use watch_history::*;
pub use watchlist::*;
