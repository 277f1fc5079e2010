//! Portal handlers
//!
//! Endpoints for disaster relief portal management.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use relief_service::dto::{
    CascadeSummaryResponse, CreatePortalRequest, MultiStatsRequest, PortalResponse,
    PortalStatsResponse, UpdatePortalRequest, UpdatePortalStatusRequest,
};
use relief_service::services::PortalService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Create a new portal
///
/// POST /portals
pub async fn create_portal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePortalRequest>,
) -> ApiResult<Created<Json<PortalResponse>>> {
    let service = PortalService::new(state.service_context());
    let response = service.create_portal(&auth.uid, request).await?;
    Ok(Created(Json(response)))
}

/// List active portals, newest first
///
/// GET /portals
pub async fn list_portals(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PortalResponse>>> {
    let service = PortalService::new(state.service_context());
    let response = service.list_active().await?;
    Ok(Json(response))
}

/// Search active portals by title, description, or location
///
/// GET /portals/search?q=term
pub async fn search_portals(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<PortalResponse>>> {
    let service = PortalService::new(state.service_context());
    let response = service.search(&query.q).await?;
    Ok(Json(response))
}

/// Get portal by ID
///
/// GET /portals/{portal_id}
pub async fn get_portal(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<PortalResponse>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = PortalService::new(state.service_context());
    let response = service.get_portal(portal_id).await?;
    Ok(Json(response))
}

/// Update portal details (owner only)
///
/// PATCH /portals/{portal_id}
pub async fn update_portal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(portal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePortalRequest>,
) -> ApiResult<Json<PortalResponse>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = PortalService::new(state.service_context());
    let response = service.update_portal(portal_id, &auth.uid, request).await?;
    Ok(Json(response))
}

/// Change portal status (owner only)
///
/// PATCH /portals/{portal_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(portal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePortalStatusRequest>,
) -> ApiResult<Json<PortalResponse>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = PortalService::new(state.service_context());
    let response = service.update_status(portal_id, &auth.uid, request).await?;
    Ok(Json(response))
}

/// Delete a portal and everything attached to it (owner only)
///
/// DELETE /portals/{portal_id}
pub async fn delete_portal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<CascadeSummaryResponse>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = PortalService::new(state.service_context());
    let response = service.delete_portal(portal_id, &auth.uid).await?;
    Ok(Json(response))
}

/// Aggregate counters for one portal
///
/// GET /portals/{portal_id}/stats
pub async fn portal_stats(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<PortalStatsResponse>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = PortalService::new(state.service_context());
    let response = service.stats(portal_id).await?;
    Ok(Json(response))
}

/// Aggregate counters for several portals at once
///
/// POST /portals/stats
pub async fn multi_stats(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MultiStatsRequest>,
) -> ApiResult<Json<Vec<PortalStatsResponse>>> {
    let service = PortalService::new(state.service_context());
    let response = service.multi_stats(&request.portal_ids).await?;
    Ok(Json(response))
}

pub(crate) fn parse_portal_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid portal_id format"))
}
