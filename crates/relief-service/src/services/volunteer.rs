//! Volunteer service
//!
//! Handles volunteer registration for portals.

use tracing::{info, instrument};
use uuid::Uuid;

use relief_core::entities::Volunteer;
use relief_core::error::DomainError;

use crate::dto::{RegisterVolunteerRequest, VolunteerResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Volunteer service
pub struct VolunteerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VolunteerService<'a> {
    /// Create a new VolunteerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register the authenticated user as a volunteer for a portal
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        portal_id: Uuid,
        uid: &str,
        request: RegisterVolunteerRequest,
    ) -> ServiceResult<VolunteerResponse> {
        self.require_portal(portal_id).await?;

        if self
            .ctx
            .volunteer_repo()
            .is_registered(portal_id, uid)
            .await?
        {
            return Err(ServiceError::from(DomainError::AlreadyVolunteering));
        }

        let volunteer = Volunteer::new(
            self.ctx.generate_id(),
            portal_id,
            uid.to_string(),
            request.name,
            request.email,
            request.phone,
            request.skills,
            request.availability,
        );

        self.ctx.volunteer_repo().create(&volunteer).await?;

        info!(portal_id = %portal_id, uid = %uid, "Volunteer registered");

        Ok(VolunteerResponse::from(&volunteer))
    }

    /// List volunteers for a portal, newest first
    #[instrument(skip(self))]
    pub async fn list_by_portal(&self, portal_id: Uuid) -> ServiceResult<Vec<VolunteerResponse>> {
        self.require_portal(portal_id).await?;

        let volunteers = self.ctx.volunteer_repo().find_by_portal(portal_id).await?;
        Ok(volunteers.iter().map(VolunteerResponse::from).collect())
    }

    /// List a user's volunteer registrations across portals
    #[instrument(skip(self))]
    pub async fn user_activities(&self, uid: &str) -> ServiceResult<Vec<VolunteerResponse>> {
        let volunteers = self.ctx.volunteer_repo().find_by_user(uid).await?;
        Ok(volunteers.iter().map(VolunteerResponse::from).collect())
    }

    async fn require_portal(&self, portal_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .portal_repo()
            .find_by_id(portal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Portal", portal_id.to_string()))?;
        Ok(())
    }
}
