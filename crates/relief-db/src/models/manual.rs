//! Manual and portal-manual link database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for manuals table
///
/// Sections are stored as a JSONB array of `{title, content}` objects.
#[derive(Debug, Clone, FromRow)]
pub struct ManualModel {
    pub id: Uuid,
    pub disaster_type: String,
    pub title: String,
    pub content: String,
    pub sections: serde_json::Value,
    pub for_victims: bool,
    pub for_helpers: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Database model for portal_manuals join table
#[derive(Debug, Clone, FromRow)]
pub struct PortalManualModel {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub manual_id: Uuid,
    pub disaster_type: String,
    pub attached_at: DateTime<Utc>,
}
