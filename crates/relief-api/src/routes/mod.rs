//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{forum, health, manuals, portals, resources, updates, users, volunteers};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(portal_routes())
        .merge(resource_routes())
        .merge(forum_routes())
        .merge(manual_routes())
        .merge(user_routes())
}

/// Portal routes, including per-portal sub-resources
fn portal_routes() -> Router<AppState> {
    Router::new()
        // Portal CRUD
        .route("/portals", post(portals::create_portal))
        .route("/portals", get(portals::list_portals))
        .route("/portals/search", get(portals::search_portals))
        .route("/portals/stats", post(portals::multi_stats))
        .route("/portals/:portal_id", get(portals::get_portal))
        .route("/portals/:portal_id", patch(portals::update_portal))
        .route("/portals/:portal_id", delete(portals::delete_portal))
        .route("/portals/:portal_id/status", patch(portals::update_status))
        .route("/portals/:portal_id/stats", get(portals::portal_stats))
        // Resource needs
        .route("/portals/:portal_id/resources", get(resources::list_portal_resources))
        .route("/portals/:portal_id/resources", post(resources::create_resource))
        // Volunteers
        .route("/portals/:portal_id/volunteers", get(volunteers::list_volunteers))
        .route("/portals/:portal_id/volunteers", post(volunteers::register_volunteer))
        // Updates
        .route("/portals/:portal_id/updates", get(updates::list_updates))
        .route("/portals/:portal_id/updates", post(updates::create_update))
        // Forum posts
        .route("/portals/:portal_id/posts", get(forum::list_posts))
        .route("/portals/:portal_id/posts", post(forum::create_post))
        // Manuals attached to the portal
        .route("/portals/:portal_id/manuals", get(manuals::portal_manuals))
}

/// Cross-portal resource routes
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/resources", get(resources::list_all_resources))
        .route("/resources/:resource_id", get(resources::get_resource))
        .route("/resources/:resource_id", patch(resources::update_resource))
}

/// Forum post and comment routes
fn forum_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id", get(forum::get_post))
        .route("/posts/:post_id/comments", get(forum::list_comments))
        .route("/posts/:post_id/comments", post(forum::create_comment))
}

/// Self-help manual routes
fn manual_routes() -> Router<AppState> {
    Router::new()
        .route("/manuals", get(manuals::list_manuals))
        .route("/manuals", post(manuals::create_manual))
        .route("/manuals/:manual_id", get(manuals::get_manual))
        .route("/manuals/types/:disaster_type", get(manuals::manuals_by_type))
}

/// Authenticated user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/portals", get(users::get_my_portals))
        .route("/users/@me/volunteers", get(users::get_my_volunteer_activities))
}
