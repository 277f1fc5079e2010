//! Self-help manual entities
//!
//! Manuals are static guidance tagged by disaster type. When no manual exists
//! for a type, the service seeds two defaults from the templates below (one
//! for victims, one for relief workers) before linking them to a portal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kinds::DisasterType;

/// Author recorded on seeded default manuals
pub const SYSTEM_AUTHOR: &str = "system";

/// One titled block of manual content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualSection {
    pub title: String,
    pub content: String,
}

/// Self-help manual tagged by disaster type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manual {
    pub id: Uuid,
    pub disaster_type: DisasterType,
    pub title: String,
    pub content: String,
    pub sections: Vec<ManualSection>,
    pub for_victims: bool,
    pub for_helpers: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Manual {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        disaster_type: DisasterType,
        title: String,
        content: String,
        sections: Vec<ManualSection>,
        for_victims: bool,
        for_helpers: bool,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            disaster_type,
            title,
            content,
            sections,
            for_victims,
            for_helpers,
            created_by,
            created_at: now,
            last_updated: now,
        }
    }

    /// Default safety guide for people affected by the given disaster type
    pub fn default_victim_guide(id: Uuid, disaster_type: DisasterType) -> Self {
        let name = disaster_type.display_name();
        let kind = disaster_type.as_str();
        Self::new(
            id,
            disaster_type,
            format!("{name} Safety Guide"),
            format!("Comprehensive safety information for {kind} situations."),
            vec![
                ManualSection {
                    title: "Before Emergency".to_string(),
                    content: format!(
                        "1. Create a {kind} emergency plan\n2. Prepare essential supplies\n3. Stay informed through official channels"
                    ),
                },
                ManualSection {
                    title: "During Emergency".to_string(),
                    content: format!(
                        "1. Stay calm\n2. Follow your {kind} emergency plan\n3. Listen to official instructions"
                    ),
                },
                ManualSection {
                    title: "After Emergency".to_string(),
                    content: "1. Check for injuries\n2. Assess damage carefully\n3. Connect with community resources"
                        .to_string(),
                },
            ],
            true,
            false,
            SYSTEM_AUTHOR.to_string(),
        )
    }

    /// Default guide for relief workers responding to the given disaster type
    pub fn default_helper_guide(id: Uuid, disaster_type: DisasterType) -> Self {
        let name = disaster_type.display_name();
        let kind = disaster_type.as_str();
        Self::new(
            id,
            disaster_type,
            format!("{name} Relief Worker Guide"),
            format!("Essential guidance for {kind} emergency response personnel."),
            vec![
                ManualSection {
                    title: "Assessment Procedures".to_string(),
                    content: format!(
                        "1. Evaluate {kind}-specific safety risks\n2. Identify urgent needs\n3. Document conditions systematically"
                    ),
                },
                ManualSection {
                    title: "Resource Distribution".to_string(),
                    content: "1. Organize staging areas\n2. Prioritize vulnerable populations\n3. Maintain clear records"
                        .to_string(),
                },
            ],
            false,
            true,
            SYSTEM_AUTHOR.to_string(),
        )
    }
}

/// Join record linking a manual to a portal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalManualLink {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub manual_id: Uuid,
    pub disaster_type: DisasterType,
    pub attached_at: DateTime<Utc>,
}

impl PortalManualLink {
    pub fn new(id: Uuid, portal_id: Uuid, manual_id: Uuid, disaster_type: DisasterType) -> Self {
        Self {
            id,
            portal_id,
            manual_id,
            disaster_type,
            attached_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_victim_guide_shape() {
        let guide = Manual::default_victim_guide(Uuid::new_v4(), DisasterType::Flood);
        assert_eq!(guide.title, "Flood Safety Guide");
        assert_eq!(guide.sections.len(), 3);
        assert!(guide.for_victims);
        assert!(!guide.for_helpers);
        assert_eq!(guide.created_by, SYSTEM_AUTHOR);
    }

    #[test]
    fn test_default_helper_guide_shape() {
        let guide = Manual::default_helper_guide(Uuid::new_v4(), DisasterType::Cyclone);
        assert_eq!(guide.title, "Cyclone Relief Worker Guide");
        assert_eq!(guide.sections.len(), 2);
        assert!(!guide.for_victims);
        assert!(guide.for_helpers);
    }
}
