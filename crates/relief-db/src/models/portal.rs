//! Portal database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for portals table
#[derive(Debug, Clone, FromRow)]
pub struct PortalModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: String,
    pub disaster_type: String,
    pub image: Option<String>,
    pub created_by: String,
    pub status: String,
    pub resolution_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}
