//! Update entity - a dated announcement on a portal's timeline

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Title used for the update synthesized when a portal is resolved
pub const RESOLUTION_UPDATE_TITLE: &str = "Disaster Relief Effort Completed";

/// Fallback content for a resolution update when no summary was provided
pub const RESOLUTION_UPDATE_FALLBACK: &str =
    "This disaster relief portal has been marked as resolved.";

/// Author recorded on system-generated resolution updates
pub const RESOLUTION_UPDATE_AUTHOR: &str = "Portal Admin";

/// Portal timeline update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub is_resolution: bool,
    pub created_at: DateTime<Utc>,
}

impl Update {
    pub fn new(
        id: Uuid,
        portal_id: Uuid,
        title: String,
        content: String,
        created_by: String,
    ) -> Self {
        Self {
            id,
            portal_id,
            title,
            content,
            created_by,
            is_resolution: false,
            created_at: Utc::now(),
        }
    }

    /// Build the system-generated update recorded alongside a resolution
    pub fn resolution(id: Uuid, portal_id: Uuid, summary: Option<&str>) -> Self {
        Self {
            id,
            portal_id,
            title: RESOLUTION_UPDATE_TITLE.to_string(),
            content: summary.unwrap_or(RESOLUTION_UPDATE_FALLBACK).to_string(),
            created_by: RESOLUTION_UPDATE_AUTHOR.to_string(),
            is_resolution: true,
            created_at: Utc::now(),
        }
    }
}
