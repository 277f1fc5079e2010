//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod forum;
pub mod manual;
pub mod portal;
pub mod resource;
pub mod update;
pub mod volunteer;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use forum::ForumService;
pub use manual::ManualService;
pub use portal::PortalService;
pub use resource::ResourceService;
pub use update::UpdateService;
pub use volunteer::VolunteerService;
