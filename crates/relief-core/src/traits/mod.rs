//! Repository traits (ports) for the data-access layer

mod repositories;

pub use repositories::{
    CascadeSummary, ForumRepository, ManualRepository, PortalRepository, PortalStats, RepoResult,
    ResourceRepository, UpdateRepository, VolunteerRepository,
};
