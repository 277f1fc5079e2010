//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod forum;
pub mod health;
pub mod manuals;
pub mod portals;
pub mod resources;
pub mod updates;
pub mod users;
pub mod volunteers;
