//! Update handlers
//!
//! Endpoints for the dated announcements on a portal's timeline.

use axum::{
    extract::{Path, State},
    Json,
};

use relief_service::dto::{CreateUpdateRequest, UpdateResponse};
use relief_service::services::UpdateService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::portals::parse_portal_id;

/// List updates for a portal, newest first
///
/// GET /portals/{portal_id}/updates
pub async fn list_updates(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<Vec<UpdateResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = UpdateService::new(state.service_context());
    let response = service.list_by_portal(portal_id).await?;
    Ok(Json(response))
}

/// Post an update to a portal's timeline (owner only)
///
/// POST /portals/{portal_id}/updates
pub async fn create_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(portal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateUpdateRequest>,
) -> ApiResult<Created<Json<UpdateResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = UpdateService::new(state.service_context());
    let response = service.create_update(portal_id, &auth.uid, request).await?;
    Ok(Created(Json(response)))
}
