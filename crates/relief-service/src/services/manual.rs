//! Manual service
//!
//! Handles self-help manuals: listing, creation, default seeding, and the
//! links that attach manuals to portals.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use relief_core::entities::{DisasterType, Manual, ManualSection, PortalManualLink};

use crate::dto::{CreateManualRequest, ManualResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Manual service
pub struct ManualService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ManualService<'a> {
    /// Create a new ManualService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get manual by ID
    #[instrument(skip(self))]
    pub async fn get_manual(&self, manual_id: Uuid) -> ServiceResult<ManualResponse> {
        let manual = self
            .ctx
            .manual_repo()
            .find_by_id(manual_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Manual", manual_id.to_string()))?;

        Ok(ManualResponse::from(&manual))
    }

    /// List all manuals, most recently updated first
    #[instrument(skip(self))]
    pub async fn list_manuals(&self) -> ServiceResult<Vec<ManualResponse>> {
        let manuals = self.ctx.manual_repo().find_all().await?;
        Ok(manuals.iter().map(ManualResponse::from).collect())
    }

    /// Create a new manual
    #[instrument(skip(self, request))]
    pub async fn create_manual(
        &self,
        uid: &str,
        request: CreateManualRequest,
    ) -> ServiceResult<ManualResponse> {
        let manual = Manual::new(
            self.ctx.generate_id(),
            request.disaster_type,
            request.title,
            request.content,
            request
                .sections
                .into_iter()
                .map(|s| ManualSection {
                    title: s.title,
                    content: s.content,
                })
                .collect(),
            request.for_victims,
            request.for_helpers,
            uid.to_string(),
        );

        self.ctx.manual_repo().create(&manual).await?;

        info!(manual_id = %manual.id, disaster_type = %manual.disaster_type, "Manual created");

        Ok(ManualResponse::from(&manual))
    }

    /// List manuals for a disaster type, seeding the default victim and
    /// relief-worker guides when none exist yet
    #[instrument(skip(self))]
    pub async fn manuals_for_type(
        &self,
        disaster_type: DisasterType,
    ) -> ServiceResult<Vec<ManualResponse>> {
        let manuals = self.ensure_manuals_for_type(disaster_type).await?;
        Ok(manuals.iter().map(ManualResponse::from).collect())
    }

    /// List the manuals attached to a portal
    ///
    /// Links pointing at manuals that no longer exist are skipped. A portal
    /// without any usable links falls back to the by-type listing.
    #[instrument(skip(self))]
    pub async fn portal_manuals(
        &self,
        portal_id: Uuid,
        disaster_type: DisasterType,
    ) -> ServiceResult<Vec<ManualResponse>> {
        let links = self.ctx.manual_repo().find_links_by_portal(portal_id).await?;

        let mut manuals = Vec::with_capacity(links.len());
        for link in &links {
            match self.ctx.manual_repo().find_by_id(link.manual_id).await? {
                Some(manual) => manuals.push(manual),
                None => {
                    warn!(
                        portal_id = %portal_id,
                        manual_id = %link.manual_id,
                        "Skipping dangling manual link"
                    );
                }
            }
        }

        if manuals.is_empty() {
            return self.manuals_for_type(disaster_type).await;
        }

        Ok(manuals.iter().map(ManualResponse::from).collect())
    }

    /// Attach the manuals for a disaster type to a portal, seeding the
    /// defaults first when the type has none
    #[instrument(skip(self))]
    pub async fn attach_to_portal(
        &self,
        portal_id: Uuid,
        disaster_type: DisasterType,
    ) -> ServiceResult<usize> {
        let manuals = self.ensure_manuals_for_type(disaster_type).await?;

        for manual in &manuals {
            let link = PortalManualLink::new(
                self.ctx.generate_id(),
                portal_id,
                manual.id,
                disaster_type,
            );
            self.ctx.manual_repo().create_link(&link).await?;
        }

        info!(
            portal_id = %portal_id,
            count = manuals.len(),
            "Manuals attached to portal"
        );

        Ok(manuals.len())
    }

    /// Fetch manuals for a type, persisting the two default guides when the
    /// type has none so links always point at stored rows
    async fn ensure_manuals_for_type(
        &self,
        disaster_type: DisasterType,
    ) -> ServiceResult<Vec<Manual>> {
        let existing = self.ctx.manual_repo().find_by_type(disaster_type).await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        let victim = Manual::default_victim_guide(self.ctx.generate_id(), disaster_type);
        let helper = Manual::default_helper_guide(self.ctx.generate_id(), disaster_type);

        self.ctx.manual_repo().create(&victim).await?;
        self.ctx.manual_repo().create(&helper).await?;

        info!(disaster_type = %disaster_type, "Seeded default manuals");

        Ok(vec![victim, helper])
    }
}
