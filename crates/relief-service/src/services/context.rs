//! Service context - dependency container for services
//!
//! Holds the repositories and other dependencies needed by services.

use std::sync::Arc;

use relief_core::traits::{
    ForumRepository, ManualRepository, PortalRepository, ResourceRepository, UpdateRepository,
    VolunteerRepository,
};
use relief_db::PgPool;
use uuid::Uuid;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    portal_repo: Arc<dyn PortalRepository>,
    resource_repo: Arc<dyn ResourceRepository>,
    volunteer_repo: Arc<dyn VolunteerRepository>,
    update_repo: Arc<dyn UpdateRepository>,
    forum_repo: Arc<dyn ForumRepository>,
    manual_repo: Arc<dyn ManualRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        portal_repo: Arc<dyn PortalRepository>,
        resource_repo: Arc<dyn ResourceRepository>,
        volunteer_repo: Arc<dyn VolunteerRepository>,
        update_repo: Arc<dyn UpdateRepository>,
        forum_repo: Arc<dyn ForumRepository>,
        manual_repo: Arc<dyn ManualRepository>,
    ) -> Self {
        Self {
            pool,
            portal_repo,
            resource_repo,
            volunteer_repo,
            update_repo,
            forum_repo,
            manual_repo,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the portal repository
    pub fn portal_repo(&self) -> &dyn PortalRepository {
        self.portal_repo.as_ref()
    }

    /// Get the resource repository
    pub fn resource_repo(&self) -> &dyn ResourceRepository {
        self.resource_repo.as_ref()
    }

    /// Get the volunteer repository
    pub fn volunteer_repo(&self) -> &dyn VolunteerRepository {
        self.volunteer_repo.as_ref()
    }

    /// Get the update repository
    pub fn update_repo(&self) -> &dyn UpdateRepository {
        self.update_repo.as_ref()
    }

    /// Get the forum repository
    pub fn forum_repo(&self) -> &dyn ForumRepository {
        self.forum_repo.as_ref()
    }

    /// Get the manual repository
    pub fn manual_repo(&self) -> &dyn ManualRepository {
        self.manual_repo.as_ref()
    }

    /// Generate a new record ID
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    portal_repo: Option<Arc<dyn PortalRepository>>,
    resource_repo: Option<Arc<dyn ResourceRepository>>,
    volunteer_repo: Option<Arc<dyn VolunteerRepository>>,
    update_repo: Option<Arc<dyn UpdateRepository>>,
    forum_repo: Option<Arc<dyn ForumRepository>>,
    manual_repo: Option<Arc<dyn ManualRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            portal_repo: None,
            resource_repo: None,
            volunteer_repo: None,
            update_repo: None,
            forum_repo: None,
            manual_repo: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn portal_repo(mut self, repo: Arc<dyn PortalRepository>) -> Self {
        self.portal_repo = Some(repo);
        self
    }

    pub fn resource_repo(mut self, repo: Arc<dyn ResourceRepository>) -> Self {
        self.resource_repo = Some(repo);
        self
    }

    pub fn volunteer_repo(mut self, repo: Arc<dyn VolunteerRepository>) -> Self {
        self.volunteer_repo = Some(repo);
        self
    }

    pub fn update_repo(mut self, repo: Arc<dyn UpdateRepository>) -> Self {
        self.update_repo = Some(repo);
        self
    }

    pub fn forum_repo(mut self, repo: Arc<dyn ForumRepository>) -> Self {
        self.forum_repo = Some(repo);
        self
    }

    pub fn manual_repo(mut self, repo: Arc<dyn ManualRepository>) -> Self {
        self.manual_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.portal_repo
                .ok_or_else(|| super::error::ServiceError::validation("portal_repo is required"))?,
            self.resource_repo
                .ok_or_else(|| super::error::ServiceError::validation("resource_repo is required"))?,
            self.volunteer_repo
                .ok_or_else(|| super::error::ServiceError::validation("volunteer_repo is required"))?,
            self.update_repo
                .ok_or_else(|| super::error::ServiceError::validation("update_repo is required"))?,
            self.forum_repo
                .ok_or_else(|| super::error::ServiceError::validation("forum_repo is required"))?,
            self.manual_repo
                .ok_or_else(|| super::error::ServiceError::validation("manual_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
