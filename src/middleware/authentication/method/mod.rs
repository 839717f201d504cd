mod f_anonym;
mod f_bearer;

pub use f_anonym::anonym;
pub use f_bearer::{try_bearer, TokenCache};
