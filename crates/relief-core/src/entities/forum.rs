//! Forum entities - per-portal discussion posts and their comments

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::kinds::ForumCategory;

/// Forum post scoped to one portal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumPost {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub is_announcement: bool,
    pub attachment_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ForumPost {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        portal_id: Uuid,
        user_id: String,
        user_name: String,
        title: String,
        content: String,
        category: ForumCategory,
    ) -> Self {
        Self {
            id,
            portal_id,
            user_id,
            user_name,
            title,
            content,
            category,
            is_announcement: false,
            attachment_urls: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check if a user authored this post
    #[inline]
    pub fn is_author(&self, uid: &str) -> bool {
        self.user_id == uid
    }
}

/// Comment on a forum post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumComment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ForumComment {
    pub fn new(
        id: Uuid,
        post_id: Uuid,
        user_id: String,
        user_name: String,
        content: String,
    ) -> Self {
        Self {
            id,
            post_id,
            user_id,
            user_name,
            content,
            created_at: Utc::now(),
        }
    }
}
