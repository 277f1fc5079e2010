//! Update database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for updates table
#[derive(Debug, Clone, FromRow)]
pub struct UpdateModel {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub is_resolution: bool,
    pub created_at: DateTime<Utc>,
}
