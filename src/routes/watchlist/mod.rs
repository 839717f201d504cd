pub mod get;
pub mod toggle;

pub use get::*;
pub use toggle::*;
