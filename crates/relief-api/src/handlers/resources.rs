//! Resource need handlers
//!
//! Endpoints for resource needs attached to portals.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use relief_service::dto::{CreateResourceRequest, ResourceResponse, UpdateResourceRequest};
use relief_service::services::ResourceService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

use super::portals::parse_portal_id;

/// List needs for a portal, highest priority first
///
/// GET /portals/{portal_id}/resources
pub async fn list_portal_resources(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<Vec<ResourceResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = ResourceService::new(state.service_context());
    let response = service.list_by_portal(portal_id).await?;
    Ok(Json(response))
}

/// Create a resource need on a portal
///
/// POST /portals/{portal_id}/resources
pub async fn create_resource(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(portal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateResourceRequest>,
) -> ApiResult<Created<Json<ResourceResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = ResourceService::new(state.service_context());
    let response = service.create_resource(portal_id, request).await?;
    Ok(Created(Json(response)))
}

/// List all needs across portals, newest first
///
/// GET /resources
pub async fn list_all_resources(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ResourceResponse>>> {
    let service = ResourceService::new(state.service_context());
    let response = service.list_all().await?;
    Ok(Json(response))
}

/// Get resource need by ID
///
/// GET /resources/{resource_id}
pub async fn get_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> ApiResult<Json<ResourceResponse>> {
    let resource_id = parse_resource_id(&resource_id)?;

    let service = ResourceService::new(state.service_context());
    let response = service.get_resource(resource_id).await?;
    Ok(Json(response))
}

/// Update a resource need, including fulfillment status
///
/// PATCH /resources/{resource_id}
pub async fn update_resource(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(resource_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateResourceRequest>,
) -> ApiResult<Json<ResourceResponse>> {
    let resource_id = parse_resource_id(&resource_id)?;

    let service = ResourceService::new(state.service_context());
    let response = service.update_resource(resource_id, request).await?;
    Ok(Json(response))
}

fn parse_resource_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid resource_id format"))
}
