//! Volunteer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for volunteers table
#[derive(Debug, Clone, FromRow)]
pub struct VolunteerModel {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub availability: String,
    pub status: String,
    pub registered_at: DateTime<Utc>,
}
