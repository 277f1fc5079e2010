//! Resource service
//!
//! Handles resource needs attached to portals.

use tracing::{info, instrument};
use uuid::Uuid;

use relief_core::entities::ResourceNeed;

use crate::dto::{CreateResourceRequest, ResourceResponse, UpdateResourceRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Resource service
pub struct ResourceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResourceService<'a> {
    /// Create a new ResourceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get resource need by ID
    #[instrument(skip(self))]
    pub async fn get_resource(&self, resource_id: Uuid) -> ServiceResult<ResourceResponse> {
        let resource = self.get_resource_entity(resource_id).await?;
        Ok(ResourceResponse::from(&resource))
    }

    /// List needs for a portal, highest priority first
    #[instrument(skip(self))]
    pub async fn list_by_portal(&self, portal_id: Uuid) -> ServiceResult<Vec<ResourceResponse>> {
        self.require_portal(portal_id).await?;

        let resources = self.ctx.resource_repo().find_by_portal(portal_id).await?;
        Ok(resources.iter().map(ResourceResponse::from).collect())
    }

    /// List all needs across portals, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ResourceResponse>> {
        let resources = self.ctx.resource_repo().find_all().await?;
        Ok(resources.iter().map(ResourceResponse::from).collect())
    }

    /// Create a resource need on a portal
    #[instrument(skip(self, request))]
    pub async fn create_resource(
        &self,
        portal_id: Uuid,
        request: CreateResourceRequest,
    ) -> ServiceResult<ResourceResponse> {
        self.require_portal(portal_id).await?;

        let resource = ResourceNeed::new(
            self.ctx.generate_id(),
            portal_id,
            request.title,
            request.description,
            request.category,
            request.quantity,
            request.unit,
            request.priority,
        );

        self.ctx.resource_repo().create(&resource).await?;

        info!(resource_id = %resource.id, portal_id = %portal_id, "Resource need created");

        Ok(ResourceResponse::from(&resource))
    }

    /// Update a resource need (partial merge)
    #[instrument(skip(self, request))]
    pub async fn update_resource(
        &self,
        resource_id: Uuid,
        request: UpdateResourceRequest,
    ) -> ServiceResult<ResourceResponse> {
        let mut resource = self.get_resource_entity(resource_id).await?;

        if let Some(title) = request.title {
            resource.title = title;
        }
        if let Some(description) = request.description {
            resource.description = description;
        }
        if let Some(category) = request.category {
            resource.category = category;
        }
        if let Some(quantity) = request.quantity {
            resource.quantity = quantity;
        }
        if let Some(unit) = request.unit {
            resource.unit = Some(unit);
        }
        if let Some(priority) = request.priority {
            resource.priority = priority;
        }
        if let Some(status) = request.status {
            resource.status = status;
        }

        self.ctx.resource_repo().update(&resource).await?;

        Ok(ResourceResponse::from(&resource))
    }

    async fn get_resource_entity(&self, resource_id: Uuid) -> ServiceResult<ResourceNeed> {
        self.ctx
            .resource_repo()
            .find_by_id(resource_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resource need", resource_id.to_string()))
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
