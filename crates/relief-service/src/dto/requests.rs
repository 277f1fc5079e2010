//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where they carry free-form
//! input, `Validate`. Enum-valued fields reject unknown variants during
//! deserialization, so they need no extra validation rules.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use relief_core::entities::{
    DisasterType, ForumCategory, PortalStatus, Priority, ResourceCategory, ResourceStatus,
    Urgency,
};

// ============================================================================
// Portal Requests
// ============================================================================

/// Create portal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortalRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,

    pub urgency: Urgency,

    pub disaster_type: DisasterType,

    /// Optional image URL
    pub image: Option<String>,

    /// Initial status, defaults to `active` when omitted
    #[serde(default)]
    pub status: Option<PortalStatus>,
}

/// Update portal request (partial merge)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePortalRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: Option<String>,

    pub urgency: Option<Urgency>,

    /// Image URL or null to leave unchanged
    pub image: Option<String>,
}

/// Update portal status request
///
/// Setting the status to `resolved` also records a system-generated
/// resolution update built from the summary.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePortalStatusRequest {
    pub status: PortalStatus,

    #[validate(length(max = 5000, message = "Summary must be at most 5000 characters"))]
    pub resolution_summary: Option<String>,
}

/// Batched stats request for dashboard views
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MultiStatsRequest {
    #[validate(length(min = 1, max = 100, message = "Provide 1-100 portal ids"))]
    pub portal_ids: Vec<Uuid>,
}

// ============================================================================
// Resource Requests
// ============================================================================

/// Create resource need request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(default)]
    pub description: String,

    pub category: ResourceCategory,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,

    #[validate(length(max = 50, message = "Unit must be at most 50 characters"))]
    pub unit: Option<String>,

    pub priority: Priority,
}

/// Update resource need request (partial merge)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateResourceRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub category: Option<ResourceCategory>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i64>,

    pub unit: Option<String>,

    pub priority: Option<Priority>,

    pub status: Option<ResourceStatus>,
}

// ============================================================================
// Volunteer Requests
// ============================================================================

/// Volunteer registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterVolunteerRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[validate(length(min = 1, max = 200, message = "Availability must be 1-200 characters"))]
    pub availability: String,
}

// ============================================================================
// Update Requests
// ============================================================================

/// Create portal update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUpdateRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

// ============================================================================
// Forum Requests
// ============================================================================

/// Create forum post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    pub category: ForumCategory,

    #[serde(default)]
    pub is_announcement: bool,

    #[serde(default)]
    pub attachment_urls: Vec<String>,
}

/// Create forum comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

// ============================================================================
// Manual Requests
// ============================================================================

/// One section of manual content
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ManualSectionPayload {
    #[validate(length(min = 1, max = 150, message = "Section title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Section content must be 1-10000 characters"))]
    pub content: String,
}

/// Create self-help manual request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateManualRequest {
    pub disaster_type: DisasterType,

    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    #[validate(nested)]
    #[serde(default)]
    pub sections: Vec<ManualSectionPayload>,

    #[serde(default)]
    pub for_victims: bool,

    #[serde(default)]
    pub for_helpers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_portal_request_validates() {
        let req = CreatePortalRequest {
            title: String::new(),
            description: "desc".to_string(),
            location: "loc".to_string(),
            urgency: Urgency::High,
            disaster_type: DisasterType::Flood,
            image: None,
            status: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_enum_variant_rejected() {
        let result: Result<CreatePortalRequest, _> = serde_json::from_value(serde_json::json!({
            "title": "Flood",
            "description": "desc",
            "location": "loc",
            "urgency": "catastrophic",
            "disaster_type": "flood"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_resource_quantity_minimum() {
        let req = CreateResourceRequest {
            title: "Water".to_string(),
            description: String::new(),
            category: ResourceCategory::Water,
            quantity: 0,
            unit: None,
            priority: Priority::High,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_volunteer_email_validated() {
        let req = RegisterVolunteerRequest {
            name: "Asha".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            skills: vec![],
            availability: "weekends".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
