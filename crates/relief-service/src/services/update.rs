//! Update service
//!
//! Handles the dated announcements on a portal's timeline.

use tracing::{info, instrument};
use uuid::Uuid;

use relief_core::entities::Update;

use crate::dto::{CreateUpdateRequest, UpdateResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Update service
pub struct UpdateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UpdateService<'a> {
    /// Create a new UpdateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List updates for a portal, newest first
    #[instrument(skip(self))]
    pub async fn list_by_portal(&self, portal_id: Uuid) -> ServiceResult<Vec<UpdateResponse>> {
        self.require_portal(portal_id).await?;

        let updates = self.ctx.update_repo().find_by_portal(portal_id).await?;
        Ok(updates.iter().map(UpdateResponse::from).collect())
    }

    /// Post an update to a portal's timeline (owner only)
    #[instrument(skip(self, request))]
    pub async fn create_update(
        &self,
        portal_id: Uuid,
        uid: &str,
        request: CreateUpdateRequest,
    ) -> ServiceResult<UpdateResponse> {
        let portal = self
            .ctx
            .portal_repo()
            .find_by_id(portal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Portal", portal_id.to_string()))?;

        if !portal.is_owner(uid) {
            return Err(ServiceError::permission_denied(
                "Only the portal owner can post updates",
            ));
        }

        let update = Update::new(
            self.ctx.generate_id(),
            portal_id,
            request.title,
            request.content,
            uid.to_string(),
        );

        self.ctx.update_repo().create(&update).await?;

        info!(update_id = %update.id, portal_id = %portal_id, "Update posted");

        Ok(UpdateResponse::from(&update))
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
