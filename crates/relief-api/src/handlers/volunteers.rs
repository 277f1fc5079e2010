//! Volunteer handlers
//!
//! Endpoints for volunteer registration.

use axum::{
    extract::{Path, State},
    Json,
};

use relief_service::dto::{RegisterVolunteerRequest, VolunteerResponse};
use relief_service::services::VolunteerService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::portals::parse_portal_id;

/// List volunteers for a portal, newest first
///
/// GET /portals/{portal_id}/volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<Vec<VolunteerResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = VolunteerService::new(state.service_context());
    let response = service.list_by_portal(portal_id).await?;
    Ok(Json(response))
}

/// Register the authenticated user as a volunteer
///
/// POST /portals/{portal_id}/volunteers
pub async fn register_volunteer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(portal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<RegisterVolunteerRequest>,
) -> ApiResult<Created<Json<VolunteerResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = VolunteerService::new(state.service_context());
    let response = service.register(portal_id, &auth.uid, request).await?;
    Ok(Created(Json(response)))
}
