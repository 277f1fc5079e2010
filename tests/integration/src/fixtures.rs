//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for
//! integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Portal fixtures
// ============================================================================

/// Create portal request
#[derive(Debug, Serialize)]
pub struct CreatePortalBody {
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: String,
    pub disaster_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreatePortalBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Flood relief {suffix}"),
            description: format!("Coordination hub for flood response {suffix}"),
            location: format!("Riverside district {suffix}"),
            urgency: "high".to_string(),
            disaster_type: "flood".to_string(),
            image: None,
            status: None,
        }
    }

    pub fn with_disaster_type(disaster_type: &str) -> Self {
        let mut body = Self::unique();
        body.disaster_type = disaster_type.to_string();
        body.title = format!("{disaster_type} relief {}", unique_suffix());
        body
    }
}

/// Update portal request
#[derive(Debug, Default, Serialize)]
pub struct UpdatePortalBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Update portal status request
#[derive(Debug, Serialize)]
pub struct UpdateStatusBody {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_summary: Option<String>,
}

/// Multi-portal stats request
#[derive(Debug, Serialize)]
pub struct MultiStatsBody {
    pub portal_ids: Vec<String>,
}

/// Portal response
#[derive(Debug, Deserialize)]
pub struct PortalBody {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: String,
    pub disaster_type: String,
    pub created_by: String,
    pub status: String,
    pub resolution_summary: Option<String>,
    pub created_at: String,
    pub resolved_at: Option<String>,
    pub last_updated: String,
}

/// Portal stats response
#[derive(Debug, Deserialize)]
pub struct StatsBody {
    pub portal_id: String,
    pub volunteers: i64,
    pub resource_needs: i64,
    pub total_resources: i64,
    pub resources_fulfilled: i64,
}

/// Cascade delete summary response
#[derive(Debug, Deserialize)]
pub struct CascadeBody {
    pub resources: u64,
    pub volunteers: u64,
    pub updates: u64,
    pub posts: u64,
    pub comments: u64,
    pub manual_links: u64,
}

// ============================================================================
// Resource fixtures
// ============================================================================

/// Create resource need request
#[derive(Debug, Serialize)]
pub struct CreateResourceBody {
    pub title: String,
    pub description: String,
    pub category: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub priority: String,
}

impl CreateResourceBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Drinking water {suffix}"),
            description: "Bottled water for displaced families".to_string(),
            category: "water".to_string(),
            quantity: 100,
            unit: Some("bottles".to_string()),
            priority: "high".to_string(),
        }
    }

    pub fn with_priority(priority: &str) -> Self {
        let mut body = Self::unique();
        body.priority = priority.to_string();
        body
    }
}

/// Update resource need request
#[derive(Debug, Default, Serialize)]
pub struct UpdateResourceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Resource need response
#[derive(Debug, Deserialize)]
pub struct ResourceBody {
    pub id: String,
    pub portal_id: String,
    pub title: String,
    pub category: String,
    pub quantity: i64,
    pub priority: String,
    pub status: String,
}

// ============================================================================
// Volunteer fixtures
// ============================================================================

/// Register volunteer request
#[derive(Debug, Serialize)]
pub struct RegisterVolunteerBody {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub availability: String,
}

impl RegisterVolunteerBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Volunteer {suffix}"),
            email: format!("volunteer{suffix}@example.com"),
            phone: None,
            skills: vec!["first_aid".to_string()],
            availability: "weekends".to_string(),
        }
    }
}

/// Volunteer response
#[derive(Debug, Deserialize)]
pub struct VolunteerBody {
    pub id: String,
    pub portal_id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub availability: String,
    pub status: String,
}

// ============================================================================
// Update fixtures
// ============================================================================

/// Create timeline update request
#[derive(Debug, Serialize)]
pub struct CreateUpdateBody {
    pub title: String,
    pub content: String,
}

impl CreateUpdateBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Situation update {suffix}"),
            content: "Water levels are receding in the northern sector.".to_string(),
        }
    }
}

/// Timeline update response
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub id: String,
    pub portal_id: String,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub is_resolution: bool,
}

// ============================================================================
// Forum fixtures
// ============================================================================

/// Create forum post request
#[derive(Debug, Serialize)]
pub struct CreatePostBody {
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_announcement: bool,
    pub attachment_urls: Vec<String>,
}

impl CreatePostBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Shelter locations {suffix}"),
            content: "The community center on 5th street is open overnight.".to_string(),
            category: "general".to_string(),
            is_announcement: false,
            attachment_urls: Vec::new(),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentBody {
    pub content: String,
}

/// Forum post response
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: String,
    pub portal_id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_announcement: bool,
}

/// Forum comment response
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
}

// ============================================================================
// Manual fixtures
// ============================================================================

/// Create manual request
#[derive(Debug, Serialize)]
pub struct CreateManualBody {
    pub disaster_type: String,
    pub title: String,
    pub content: String,
    pub sections: Vec<ManualSectionBody>,
    pub for_victims: bool,
    pub for_helpers: bool,
}

#[derive(Debug, Serialize)]
pub struct ManualSectionBody {
    pub title: String,
    pub content: String,
}

impl CreateManualBody {
    pub fn unique(disaster_type: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            disaster_type: disaster_type.to_string(),
            title: format!("Field guide {suffix}"),
            content: "How to stay safe during the response.".to_string(),
            sections: vec![ManualSectionBody {
                title: "Before you go".to_string(),
                content: "Check in with the local coordinator.".to_string(),
            }],
            for_victims: false,
            for_helpers: true,
        }
    }
}

/// Manual response
#[derive(Debug, Deserialize)]
pub struct ManualBody {
    pub id: String,
    pub disaster_type: String,
    pub title: String,
    pub content: String,
    pub for_victims: bool,
    pub for_helpers: bool,
    pub created_by: String,
}
