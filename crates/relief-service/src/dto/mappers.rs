//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use relief_core::entities::{
    ForumComment, ForumPost, Manual, ManualSection, Portal, ResourceNeed, Update, Volunteer,
};
use relief_core::traits::{CascadeSummary, PortalStats};
use uuid::Uuid;

use super::responses::{
    CascadeSummaryResponse, CommentResponse, ManualResponse, ManualSectionResponse,
    PortalResponse, PortalStatsResponse, PostResponse, ResourceResponse, UpdateResponse,
    VolunteerResponse,
};

// ============================================================================
// Portal Mappers
// ============================================================================

impl From<&Portal> for PortalResponse {
    fn from(portal: &Portal) -> Self {
        Self {
            id: portal.id.to_string(),
            title: portal.title.clone(),
            description: portal.description.clone(),
            location: portal.location.clone(),
            urgency: portal.urgency,
            disaster_type: portal.disaster_type,
            image: portal.image.clone(),
            created_by: portal.created_by.clone(),
            status: portal.status,
            resolution_summary: portal.resolution_summary.clone(),
            created_at: portal.created_at,
            resolved_at: portal.resolved_at,
            last_updated: portal.last_updated,
        }
    }
}

impl From<Portal> for PortalResponse {
    fn from(portal: Portal) -> Self {
        Self::from(&portal)
    }
}

impl PortalStatsResponse {
    pub fn new(portal_id: Uuid, stats: PortalStats) -> Self {
        Self {
            portal_id: portal_id.to_string(),
            volunteers: stats.volunteers,
            resource_needs: stats.resource_needs,
            total_resources: stats.total_resources,
            resources_fulfilled: stats.resources_fulfilled,
        }
    }
}

impl From<CascadeSummary> for CascadeSummaryResponse {
    fn from(summary: CascadeSummary) -> Self {
        Self {
            resources: summary.resources,
            volunteers: summary.volunteers,
            updates: summary.updates,
            posts: summary.posts,
            comments: summary.comments,
            manual_links: summary.manual_links,
        }
    }
}

// ============================================================================
// Resource Mappers
// ============================================================================

impl From<&ResourceNeed> for ResourceResponse {
    fn from(resource: &ResourceNeed) -> Self {
        Self {
            id: resource.id.to_string(),
            portal_id: resource.portal_id.to_string(),
            title: resource.title.clone(),
            description: resource.description.clone(),
            category: resource.category,
            quantity: resource.quantity,
            unit: resource.unit.clone(),
            priority: resource.priority,
            status: resource.status,
            created_at: resource.created_at,
        }
    }
}

impl From<ResourceNeed> for ResourceResponse {
    fn from(resource: ResourceNeed) -> Self {
        Self::from(&resource)
    }
}

// ============================================================================
// Volunteer Mappers
// ============================================================================

impl From<&Volunteer> for VolunteerResponse {
    fn from(volunteer: &Volunteer) -> Self {
        Self {
            id: volunteer.id.to_string(),
            portal_id: volunteer.portal_id.to_string(),
            user_id: volunteer.user_id.clone(),
            name: volunteer.name.clone(),
            email: volunteer.email.clone(),
            phone: volunteer.phone.clone(),
            skills: volunteer.skills.clone(),
            availability: volunteer.availability.clone(),
            status: volunteer.status,
            registered_at: volunteer.registered_at,
        }
    }
}

impl From<Volunteer> for VolunteerResponse {
    fn from(volunteer: Volunteer) -> Self {
        Self::from(&volunteer)
    }
}

// ============================================================================
// Update Mappers
// ============================================================================

impl From<&Update> for UpdateResponse {
    fn from(update: &Update) -> Self {
        Self {
            id: update.id.to_string(),
            portal_id: update.portal_id.to_string(),
            title: update.title.clone(),
            content: update.content.clone(),
            created_by: update.created_by.clone(),
            is_resolution: update.is_resolution,
            created_at: update.created_at,
        }
    }
}

impl From<Update> for UpdateResponse {
    fn from(update: Update) -> Self {
        Self::from(&update)
    }
}

// ============================================================================
// Forum Mappers
// ============================================================================

impl From<&ForumPost> for PostResponse {
    fn from(post: &ForumPost) -> Self {
        Self {
            id: post.id.to_string(),
            portal_id: post.portal_id.to_string(),
            user_id: post.user_id.clone(),
            user_name: post.user_name.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category,
            is_announcement: post.is_announcement,
            attachment_urls: post.attachment_urls.clone(),
            created_at: post.created_at,
        }
    }
}

impl From<ForumPost> for PostResponse {
    fn from(post: ForumPost) -> Self {
        Self::from(&post)
    }
}

impl From<&ForumComment> for CommentResponse {
    fn from(comment: &ForumComment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.clone(),
            user_name: comment.user_name.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<ForumComment> for CommentResponse {
    fn from(comment: ForumComment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Manual Mappers
// ============================================================================

impl From<&ManualSection> for ManualSectionResponse {
    fn from(section: &ManualSection) -> Self {
        Self {
            title: section.title.clone(),
            content: section.content.clone(),
        }
    }
}

impl From<&Manual> for ManualResponse {
    fn from(manual: &Manual) -> Self {
        Self {
            id: manual.id.to_string(),
            disaster_type: manual.disaster_type,
            title: manual.title.clone(),
            content: manual.content.clone(),
            sections: manual.sections.iter().map(ManualSectionResponse::from).collect(),
            for_victims: manual.for_victims,
            for_helpers: manual.for_helpers,
            created_by: manual.created_by.clone(),
            created_at: manual.created_at,
            last_updated: manual.last_updated,
        }
    }
}

impl From<Manual> for ManualResponse {
    fn from(manual: Manual) -> Self {
        Self::from(&manual)
    }
}
