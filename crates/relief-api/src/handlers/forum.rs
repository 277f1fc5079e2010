//! Forum handlers
//!
//! Endpoints for per-portal discussion posts and comments.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use relief_service::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, PostResponse,
};
use relief_service::services::ForumService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

use super::portals::parse_portal_id;

/// List posts for a portal, newest first
///
/// GET /portals/{portal_id}/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Path(portal_id): Path<String>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = ForumService::new(state.service_context());
    let response = service.list_posts(portal_id).await?;
    Ok(Json(response))
}

/// Create a post on a portal's forum
///
/// POST /portals/{portal_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(portal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let portal_id = parse_portal_id(&portal_id)?;

    let service = ForumService::new(state.service_context());
    let response = service
        .create_post(portal_id, &auth.uid, auth.display_name(), request)
        .await?;
    Ok(Created(Json(response)))
}

/// Get forum post by ID
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = ForumService::new(state.service_context());
    let response = service.get_post(post_id).await?;
    Ok(Json(response))
}

/// List comments on a post, oldest first
///
/// GET /posts/{post_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let post_id = parse_post_id(&post_id)?;

    let service = ForumService::new(state.service_context());
    let response = service.list_comments(post_id).await?;
    Ok(Json(response))
}

/// Comment on a post
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let post_id = parse_post_id(&post_id)?;

    let service = ForumService::new(state.service_context());
    let response = service
        .create_comment(post_id, &auth.uid, auth.display_name(), request)
        .await?;
    Ok(Created(Json(response)))
}

fn parse_post_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
}
