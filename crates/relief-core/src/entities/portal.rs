//! Portal entity - a coordination hub scoped to one disaster event

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::kinds::{DisasterType, PortalStatus, Urgency};

/// Disaster portal entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portal {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub disaster_type: DisasterType,
    pub image: Option<String>,
    pub created_by: String,
    pub status: PortalStatus,
    pub resolution_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}

impl Portal {
    /// Create a new active portal owned by `created_by`
    pub fn new(
        id: Uuid,
        title: String,
        description: String,
        location: String,
        urgency: Urgency,
        disaster_type: DisasterType,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            location,
            urgency,
            disaster_type,
            image: None,
            created_by,
            status: PortalStatus::Active,
            resolution_summary: None,
            created_at: now,
            resolved_at: None,
            last_updated: now,
        }
    }

    /// Check if a user created this portal
    #[inline]
    pub fn is_owner(&self, uid: &str) -> bool {
        self.created_by == uid
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == PortalStatus::Active
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.status == PortalStatus::Resolved
    }

    /// Mark the portal as resolved with an optional summary
    pub fn resolve(&mut self, summary: Option<String>) {
        let now = Utc::now();
        self.status = PortalStatus::Resolved;
        self.resolution_summary = summary;
        self.resolved_at = Some(now);
        self.last_updated = now;
    }

    /// Switch status without resolution bookkeeping
    pub fn set_status(&mut self, status: PortalStatus) {
        self.status = status;
        self.last_updated = Utc::now();
    }

    /// Case-insensitive substring match over title, description, and location
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
    }

    /// Bump the last-updated timestamp after a partial edit
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Portal {
        Portal::new(
            Uuid::new_v4(),
            "Riverbank Flooding".to_string(),
            "Flash flooding along the east bank".to_string(),
            "Dhaka".to_string(),
            Urgency::High,
            DisasterType::Flood,
            "uid-1".to_string(),
        )
    }

    #[test]
    fn test_new_portal_defaults() {
        let portal = sample();
        assert_eq!(portal.status, PortalStatus::Active);
        assert!(portal.resolution_summary.is_none());
        assert!(portal.resolved_at.is_none());
        assert!(portal.is_owner("uid-1"));
        assert!(!portal.is_owner("uid-2"));
    }

    #[test]
    fn test_resolve_sets_summary_and_timestamp() {
        let mut portal = sample();
        portal.resolve(Some("Waters receded".to_string()));
        assert!(portal.is_resolved());
        assert_eq!(portal.resolution_summary.as_deref(), Some("Waters receded"));
        assert!(portal.resolved_at.is_some());
    }

    #[test]
    fn test_matches_term_is_case_insensitive() {
        let portal = sample();
        assert!(portal.matches_term("FLOOD"));
        assert!(portal.matches_term("dhaka"));
        assert!(portal.matches_term("east bank"));
        assert!(!portal.matches_term("earthquake"));
    }
}
