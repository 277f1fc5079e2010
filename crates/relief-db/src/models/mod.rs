//! Database models - SQLx-compatible structs for PostgreSQL tables

mod forum;
mod manual;
mod portal;
mod resource;
mod update;
mod volunteer;

pub use forum::{ForumCommentModel, ForumPostModel};
pub use manual::{ManualModel, PortalManualModel};
pub use portal::PortalModel;
pub use resource::ResourceNeedModel;
pub use update::UpdateModel;
pub use volunteer::VolunteerModel;
