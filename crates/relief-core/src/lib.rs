//! # relief-core
//!
//! Domain layer containing entities, enums, and repository traits for the
//! disaster-relief coordination service. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    DisasterType, ForumCategory, ForumComment, ForumPost, KindParseError, Manual, ManualSection,
    Portal, PortalManualLink, PortalStatus, Priority, ResourceCategory, ResourceNeed,
    ResourceStatus, Update, Urgency, Volunteer, VolunteerStatus,
};
pub use error::DomainError;
pub use traits::{
    CascadeSummary, ForumRepository, ManualRepository, PortalRepository, PortalStats,
    RepoResult, ResourceRepository, UpdateRepository, VolunteerRepository,
};
