//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUIDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use relief_core::entities::{
    DisasterType, ForumCategory, PortalStatus, Priority, ResourceCategory, ResourceStatus,
    Urgency, VolunteerStatus,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

// ============================================================================
// Portal Responses
// ============================================================================

/// Portal response
#[derive(Debug, Clone, Serialize)]
pub struct PortalResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub disaster_type: DisasterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_by: String,
    pub status: PortalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}

/// Aggregated counters for one portal
#[derive(Debug, Clone, Serialize)]
pub struct PortalStatsResponse {
    pub portal_id: String,
    pub volunteers: i64,
    pub resource_needs: i64,
    pub total_resources: i64,
    pub resources_fulfilled: i64,
}

/// Row counts reported after a portal cascade delete
#[derive(Debug, Clone, Serialize)]
pub struct CascadeSummaryResponse {
    pub resources: u64,
    pub volunteers: u64,
    pub updates: u64,
    pub posts: u64,
    pub comments: u64,
    pub manual_links: u64,
}

// ============================================================================
// Resource Responses
// ============================================================================

/// Resource need response
#[derive(Debug, Clone, Serialize)]
pub struct ResourceResponse {
    pub id: String,
    pub portal_id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub priority: Priority,
    pub status: ResourceStatus,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Volunteer Responses
// ============================================================================

/// Volunteer registration response
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerResponse {
    pub id: String,
    pub portal_id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub availability: String,
    pub status: VolunteerStatus,
    pub registered_at: DateTime<Utc>,
}

// ============================================================================
// Update Responses
// ============================================================================

/// Portal timeline update response
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub id: String,
    pub portal_id: String,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub is_resolution: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Forum Responses
// ============================================================================

/// Forum post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub portal_id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub is_announcement: bool,
    pub attachment_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Forum comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Manual Responses
// ============================================================================

/// One titled block of manual content
#[derive(Debug, Clone, Serialize)]
pub struct ManualSectionResponse {
    pub title: String,
    pub content: String,
}

/// Self-help manual response
#[derive(Debug, Clone, Serialize)]
pub struct ManualResponse {
    pub id: String,
    pub disaster_type: DisasterType,
    pub title: String,
    pub content: String,
    pub sections: Vec<ManualSectionResponse>,
    pub for_victims: bool,
    pub for_helpers: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
