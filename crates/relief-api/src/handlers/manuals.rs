//! Manual handlers
//!
//! Endpoints for self-help manuals and their portal attachments.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use relief_core::entities::DisasterType;
use relief_service::dto::{CreateManualRequest, ManualResponse};
use relief_service::services::{ManualService, PortalService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

use super::portals::parse_portal_id;

/// List all manuals, most recently updated first
///
/// GET /manuals
pub async fn list_manuals(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ManualResponse>>> {
    let service = ManualService::new(state.service_context());
    let response = service.list_manuals().await?;
    Ok(Json(response))
}

/// Create a new manual
///
/// POST /manuals
pub async fn create_manual(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateManualRequest>,
) -> ApiResult<Created<Json<ManualResponse>>> {
    let service = ManualService::new(state.service_context());
    let response = service.create_manual(&auth.uid, request).await?;
    Ok(Created(Json(response)))
}

/// Get manual by ID
///
/// GET /manuals/{manual_id}
pub async fn get_manual(
    State(state): State<AppState>,
    Path(manual_id): Path<String>,
) -> ApiResult<Json<ManualResponse>> {
    let manual_id: Uuid = manual_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid manual_id format"))?;

    let service = ManualService::new(state.service_context());
    let response = service.get_manual(manual_id).await?;
    Ok(Json(response))
}

/// List manuals for a disaster type, seeding defaults when none exist
///
/// GET /manuals/types/{disaster_type}
pub async fn manuals_by_type(
    State(state): State<AppState>,
    Path(disaster_type): Path<String>,
) -> ApiResult<Json<Vec<ManualResponse>>> {
    let disaster_type: DisasterType = disaster_type
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid disaster_type"))?;

    let service = ManualService::new(state.service_context());
    let response = service.manuals_for_type(disaster_type).await?;
    Ok(Json(response))
}

/// List the manuals attached to a portal
///
/// GET /portals/{portal_id}/manuals
pub async fn portal_manuals(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<Vec<ManualResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    // The portal's disaster type drives the fallback when it has no usable
    // links, and a missing portal reads as 404.
    let portal_service = PortalService::new(state.service_context());
    let portal = portal_service.get_portal_entity(portal_id).await?;

    let service = ManualService::new(state.service_context());
    let response = service
        .portal_manuals(portal_id, portal.disaster_type)
        .await?;
    Ok(Json(response))
}
