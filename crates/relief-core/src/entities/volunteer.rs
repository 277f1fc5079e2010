//! Volunteer entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::kinds::VolunteerStatus;

/// A user registered to help at one portal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volunteer {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub availability: String,
    pub status: VolunteerStatus,
    pub registered_at: DateTime<Utc>,
}

impl Volunteer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        portal_id: Uuid,
        user_id: String,
        name: String,
        email: String,
        phone: Option<String>,
        skills: Vec<String>,
        availability: String,
    ) -> Self {
        Self {
            id,
            portal_id,
            user_id,
            name,
            email,
            phone,
            skills,
            availability,
            status: VolunteerStatus::Active,
            registered_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == VolunteerStatus::Active
    }

    /// Check whether the volunteer lists a skill (case-insensitive)
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}
