//! PostgreSQL implementation of ForumRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use relief_core::entities::{ForumComment, ForumPost};
use relief_core::traits::{ForumRepository, RepoResult};

use crate::models::{ForumCommentModel, ForumPostModel};

use super::error::map_db_error;

const POST_COLUMNS: &str = "id, portal_id, user_id, user_name, title, content, category, \
     is_announcement, attachment_urls, created_at";

/// PostgreSQL implementation of ForumRepository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    /// Create a new PgForumRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumRepository for PgForumRepository {
    #[instrument(skip(self))]
    async fn find_post(&self, id: Uuid) -> RepoResult<Option<ForumPost>> {
        let result = sqlx::query_as::<_, ForumPostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM forum_posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ForumPost::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_posts_by_portal(&self, portal_id: Uuid) -> RepoResult<Vec<ForumPost>> {
        let results = sqlx::query_as::<_, ForumPostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM forum_posts \
             WHERE portal_id = $1 ORDER BY created_at DESC"
        ))
        .bind(portal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ForumPost::try_from).collect()
    }

    #[instrument(skip(self, post))]
    async fn create_post(&self, post: &ForumPost) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO forum_posts (id, portal_id, user_id, user_name, title, content,
                                     category, is_announcement, attachment_urls, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(post.id)
        .bind(post.portal_id)
        .bind(&post.user_id)
        .bind(&post.user_name)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.category.as_str())
        .bind(post.is_announcement)
        .bind(&post.attachment_urls)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_comments(&self, post_id: Uuid) -> RepoResult<Vec<ForumComment>> {
        // Comments read oldest first so threads display in order.
        let results = sqlx::query_as::<_, ForumCommentModel>(
            r"
            SELECT id, post_id, user_id, user_name, content, created_at
            FROM forum_comments
            WHERE post_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ForumComment::try_from).collect()
    }

    #[instrument(skip(self, comment))]
    async fn create_comment(&self, comment: &ForumComment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO forum_comments (id, post_id, user_id, user_name, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(&comment.user_id)
        .bind(&comment.user_name)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
