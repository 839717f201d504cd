mod callable;
pub mod catalog;

pub use callable::*;
