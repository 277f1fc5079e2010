//! User handlers
//!
//! Endpoints for the authenticated user's own activity.

use axum::{extract::State, Json};

use relief_service::dto::{PortalResponse, VolunteerResponse};
use relief_service::services::{PortalService, VolunteerService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List portals created by the authenticated user
///
/// GET /users/@me/portals
pub async fn get_my_portals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PortalResponse>>> {
    let service = PortalService::new(state.service_context());
    let response = service.get_user_portals(&auth.uid).await?;
    Ok(Json(response))
}

/// List the authenticated user's volunteer registrations
///
/// GET /users/@me/volunteers
pub async fn get_my_volunteer_activities(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<VolunteerResponse>>> {
    let service = VolunteerService::new(state.service_context());
    let response = service.user_activities(&auth.uid).await?;
    Ok(Json(response))
}
