//! Resource need database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for resource_needs table
#[derive(Debug, Clone, FromRow)]
pub struct ResourceNeedModel {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub quantity: i64,
    pub unit: Option<String>,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
