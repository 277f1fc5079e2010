//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    DisasterType, ForumComment, ForumPost, Manual, Portal, PortalManualLink, PortalStatus,
    ResourceNeed, Update, Volunteer,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Aggregated counters for one portal's dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortalStats {
    /// Registered volunteers
    pub volunteers: i64,
    /// Number of resource-need records
    pub resource_needs: i64,
    /// Sum of requested quantities
    pub total_resources: i64,
    /// Sum of fulfilled quantities (partial needs count half, rounded)
    pub resources_fulfilled: i64,
}

/// Per-phase row counts reported by a cascade delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeSummary {
    pub resources: u64,
    pub volunteers: u64,
    pub updates: u64,
    pub posts: u64,
    pub comments: u64,
    pub manual_links: u64,
}

// ============================================================================
// Portal Repository
// ============================================================================

#[async_trait]
pub trait PortalRepository: Send + Sync {
    /// Find portal by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Portal>>;

    /// List active portals, newest first
    async fn find_active(&self) -> RepoResult<Vec<Portal>>;

    /// List portals created by a user, newest first
    async fn find_by_creator(&self, uid: &str) -> RepoResult<Vec<Portal>>;

    /// Case-insensitive substring search over title, description, and
    /// location; active portals only, newest first
    async fn search(&self, term: &str) -> RepoResult<Vec<Portal>>;

    /// Create a new portal
    async fn create(&self, portal: &Portal) -> RepoResult<()>;

    /// Update an existing portal (last-write-wins merge)
    async fn update(&self, portal: &Portal) -> RepoResult<()>;

    /// Set a non-resolved status, bumping last_updated
    async fn set_status(&self, id: Uuid, status: PortalStatus) -> RepoResult<()>;

    /// Mark the portal resolved and record the synthesized resolution update
    /// in the same transaction
    async fn resolve(&self, id: Uuid, summary: Option<&str>, update: &Update) -> RepoResult<()>;

    /// Delete the portal and every record referencing it, atomically
    async fn delete_cascade(&self, id: Uuid) -> RepoResult<CascadeSummary>;

    /// Aggregate volunteer and resource counters for one portal
    async fn stats(&self, id: Uuid) -> RepoResult<PortalStats>;
}

// ============================================================================
// Resource Repository
// ============================================================================

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Find resource need by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ResourceNeed>>;

    /// List needs for a portal, highest priority first then newest first
    async fn find_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<ResourceNeed>>;

    /// List all needs across portals, newest first
    async fn find_all(&self) -> RepoResult<Vec<ResourceNeed>>;

    /// Create a new resource need
    async fn create(&self, resource: &ResourceNeed) -> RepoResult<()>;

    /// Update an existing resource need
    async fn update(&self, resource: &ResourceNeed) -> RepoResult<()>;
}

// ============================================================================
// Volunteer Repository
// ============================================================================

#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    /// List volunteers for a portal, newest first
    async fn find_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<Volunteer>>;

    /// List a user's volunteer registrations across portals, newest first
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Volunteer>>;

    /// Check whether the user is already registered for the portal
    async fn is_registered(&self, portal_id: Uuid, user_id: &str) -> RepoResult<bool>;

    /// Register a volunteer
    async fn create(&self, volunteer: &Volunteer) -> RepoResult<()>;
}

// ============================================================================
// Update Repository
// ============================================================================

#[async_trait]
pub trait UpdateRepository: Send + Sync {
    /// List updates for a portal, newest first
    async fn find_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<Update>>;

    /// Create a new update
    async fn create(&self, update: &Update) -> RepoResult<()>;
}

// ============================================================================
// Forum Repository
// ============================================================================

#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// Find post by ID
    async fn find_post(&self, id: Uuid) -> RepoResult<Option<ForumPost>>;

    /// List posts for a portal, newest first
    async fn find_posts_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<ForumPost>>;

    /// Create a new post
    async fn create_post(&self, post: &ForumPost) -> RepoResult<()>;

    /// List comments on a post, oldest first
    async fn find_comments(&self, post_id: Uuid) -> RepoResult<Vec<ForumComment>>;

    /// Create a new comment
    async fn create_comment(&self, comment: &ForumComment) -> RepoResult<()>;
}

// ============================================================================
// Manual Repository
// ============================================================================

#[async_trait]
pub trait ManualRepository: Send + Sync {
    /// Find manual by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Manual>>;

    /// List manuals, most recently updated first, excluding test fixtures
    async fn find_all(&self) -> RepoResult<Vec<Manual>>;

    /// List manuals for a disaster type, most recently updated first,
    /// excluding test fixtures
    async fn find_by_type(&self, disaster_type: DisasterType) -> RepoResult<Vec<Manual>>;

    /// Create a new manual
    async fn create(&self, manual: &Manual) -> RepoResult<()>;

    /// Link a manual to a portal
    async fn create_link(&self, link: &PortalManualLink) -> RepoResult<()>;

    /// List manual links for a portal
    async fn find_links_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<PortalManualLink>>;
}
