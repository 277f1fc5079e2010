//! Forum post and comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for forum_posts table
#[derive(Debug, Clone, FromRow)]
pub struct ForumPostModel {
    pub id: Uuid,
    pub portal_id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_announcement: bool,
    pub attachment_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Database model for forum_comments table
#[derive(Debug, Clone, FromRow)]
pub struct ForumCommentModel {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
