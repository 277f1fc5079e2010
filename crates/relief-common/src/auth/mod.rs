//! Bearer-token verification

mod token;

pub use token::{Claims, TokenVerifier};
