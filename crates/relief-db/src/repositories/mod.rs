//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in relief-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod forum;
mod manual;
mod portal;
mod resource;
mod update;
mod volunteer;

pub use forum::PgForumRepository;
pub use manual::PgManualRepository;
pub use portal::PgPortalRepository;
pub use resource::PgResourceRepository;
pub use update::PgUpdateRepository;
pub use volunteer::PgVolunteerRepository;
