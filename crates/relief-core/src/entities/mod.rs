//! Domain entities for the relief coordination service

mod forum;
mod kinds;
mod manual;
mod portal;
mod resource;
mod update;
mod volunteer;

pub use forum::{ForumComment, ForumPost};
pub use kinds::{
    DisasterType, ForumCategory, KindParseError, PortalStatus, Priority, ResourceCategory,
    ResourceStatus, Urgency, VolunteerStatus,
};
pub use manual::{Manual, ManualSection, PortalManualLink};
pub use portal::Portal;
pub use resource::ResourceNeed;
pub use update::Update;
pub use volunteer::Volunteer;
