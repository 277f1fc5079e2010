//! Portal service
//!
//! Handles disaster portal creation, lifecycle, search, and aggregate stats.

use futures::future::try_join_all;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use relief_core::entities::{Portal, PortalStatus, Update};

use crate::dto::{
    CascadeSummaryResponse, CreatePortalRequest, PortalResponse, PortalStatsResponse,
    UpdatePortalRequest, UpdatePortalStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::manual::ManualService;

/// Stats lookups run at most this many portals concurrently.
const STATS_BATCH_SIZE: usize = 5;

/// Portal service
pub struct PortalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PortalService<'a> {
    /// Create a new PortalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new portal and attach the self-help manuals for its
    /// disaster type
    #[instrument(skip(self, request))]
    pub async fn create_portal(
        &self,
        uid: &str,
        request: CreatePortalRequest,
    ) -> ServiceResult<PortalResponse> {
        let mut portal = Portal::new(
            self.ctx.generate_id(),
            request.title,
            request.description,
            request.location,
            request.urgency,
            request.disaster_type,
            uid.to_string(),
        );
        portal.image = request.image;
        if let Some(status) = request.status {
            portal.status = status;
        }

        self.ctx.portal_repo().create(&portal).await?;

        info!(portal_id = %portal.id, uid = %uid, "Portal created");

        // Manual attachment is best effort; the portal stays usable even if
        // seeding or linking fails.
        let manual_service = ManualService::new(self.ctx);
        if let Err(e) = manual_service
            .attach_to_portal(portal.id, portal.disaster_type)
            .await
        {
            warn!(portal_id = %portal.id, error = %e, "Failed to attach manuals to portal");
        }

        Ok(PortalResponse::from(&portal))
    }

    /// Get portal by ID
    #[instrument(skip(self))]
    pub async fn get_portal(&self, portal_id: Uuid) -> ServiceResult<PortalResponse> {
        let portal = self.get_portal_entity(portal_id).await?;
        Ok(PortalResponse::from(&portal))
    }

    /// Get portal entity by ID
    #[instrument(skip(self))]
    pub async fn get_portal_entity(&self, portal_id: Uuid) -> ServiceResult<Portal> {
        self.ctx
            .portal_repo()
            .find_by_id(portal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Portal", portal_id.to_string()))
    }

    /// List active portals, newest first
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<PortalResponse>> {
        let portals = self.ctx.portal_repo().find_active().await?;
        Ok(portals.iter().map(PortalResponse::from).collect())
    }

    /// List portals created by a user
    #[instrument(skip(self))]
    pub async fn get_user_portals(&self, uid: &str) -> ServiceResult<Vec<PortalResponse>> {
        let portals = self.ctx.portal_repo().find_by_creator(uid).await?;
        Ok(portals.iter().map(PortalResponse::from).collect())
    }

    /// Search active portals by a case-insensitive substring of title,
    /// description, or location. A blank term lists all active portals.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> ServiceResult<Vec<PortalResponse>> {
        let term = term.trim();
        let portals = if term.is_empty() {
            self.ctx.portal_repo().find_active().await?
        } else {
            self.ctx.portal_repo().search(term).await?
        };
        Ok(portals.iter().map(PortalResponse::from).collect())
    }

    /// Update portal fields (partial merge, owner only)
    #[instrument(skip(self, request))]
    pub async fn update_portal(
        &self,
        portal_id: Uuid,
        uid: &str,
        request: UpdatePortalRequest,
    ) -> ServiceResult<PortalResponse> {
        let mut portal = self.get_portal_entity(portal_id).await?;

        if !portal.is_owner(uid) {
            return Err(ServiceError::permission_denied(
                "Only the portal owner can edit it",
            ));
        }

        if let Some(title) = request.title {
            portal.title = title;
        }
        if let Some(description) = request.description {
            portal.description = description;
        }
        if let Some(location) = request.location {
            portal.location = location;
        }
        if let Some(urgency) = request.urgency {
            portal.urgency = urgency;
        }
        if let Some(image) = request.image {
            portal.image = Some(image);
        }

        portal.touch();
        self.ctx.portal_repo().update(&portal).await?;

        Ok(PortalResponse::from(&portal))
    }

    /// Change portal status (owner only)
    ///
    /// Resolving also records a system-generated resolution update in the
    /// same transaction as the status change.
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        portal_id: Uuid,
        uid: &str,
        request: UpdatePortalStatusRequest,
    ) -> ServiceResult<PortalResponse> {
        let portal = self.get_portal_entity(portal_id).await?;

        if !portal.is_owner(uid) {
            return Err(ServiceError::permission_denied(
                "Only the portal owner can change its status",
            ));
        }

        if request.status == PortalStatus::Resolved {
            let summary = request.resolution_summary.as_deref();
            let update = Update::resolution(self.ctx.generate_id(), portal_id, summary);
            self.ctx
                .portal_repo()
                .resolve(portal_id, summary, &update)
                .await?;
            info!(portal_id = %portal_id, "Portal resolved");
        } else {
            self.ctx
                .portal_repo()
                .set_status(portal_id, request.status)
                .await?;
        }

        self.get_portal(portal_id).await
    }

    /// Delete a portal and everything attached to it (owner only)
    #[instrument(skip(self))]
    pub async fn delete_portal(
        &self,
        portal_id: Uuid,
        uid: &str,
    ) -> ServiceResult<CascadeSummaryResponse> {
        let portal = self.get_portal_entity(portal_id).await?;

        if !portal.is_owner(uid) {
            return Err(ServiceError::permission_denied(
                "Only the portal owner can delete it",
            ));
        }

        let summary = self.ctx.portal_repo().delete_cascade(portal_id).await?;

        info!(
            portal_id = %portal_id,
            resources = summary.resources,
            volunteers = summary.volunteers,
            posts = summary.posts,
            "Portal deleted"
        );

        Ok(CascadeSummaryResponse::from(summary))
    }

    /// Aggregate volunteer and resource counters for one portal
    #[instrument(skip(self))]
    pub async fn stats(&self, portal_id: Uuid) -> ServiceResult<PortalStatsResponse> {
        // Existence check first so a missing portal reads as 404, not zeros.
        self.get_portal_entity(portal_id).await?;

        let stats = self.ctx.portal_repo().stats(portal_id).await?;
        Ok(PortalStatsResponse::new(portal_id, stats))
    }

    /// Aggregate stats for several portals, preserving input order
    #[instrument(skip(self, portal_ids))]
    pub async fn multi_stats(
        &self,
        portal_ids: &[Uuid],
    ) -> ServiceResult<Vec<PortalStatsResponse>> {
        let mut responses = Vec::with_capacity(portal_ids.len());

        for chunk in portal_ids.chunks(STATS_BATCH_SIZE) {
            let batch = try_join_all(
                chunk
                    .iter()
                    .map(|&id| async move { self.ctx.portal_repo().stats(id).await }),
            )
            .await?;

            for (&id, stats) in chunk.iter().zip(batch) {
                responses.push(PortalStatsResponse::new(id, stats));
            }
        }

        Ok(responses)
    }
}
