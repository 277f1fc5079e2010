//! Forum service
//!
//! Handles per-portal discussion posts and their comments.

use tracing::{info, instrument};
use uuid::Uuid;

use relief_core::entities::{ForumComment, ForumPost};

use crate::dto::{CommentResponse, CreateCommentRequest, CreatePostRequest, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Forum service
pub struct ForumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get forum post by ID
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Uuid) -> ServiceResult<PostResponse> {
        let post = self.get_post_entity(post_id).await?;
        Ok(PostResponse::from(&post))
    }

    /// List posts for a portal, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self, portal_id: Uuid) -> ServiceResult<Vec<PostResponse>> {
        self.require_portal(portal_id).await?;

        let posts = self.ctx.forum_repo().find_posts_by_portal(portal_id).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Create a post on a portal's forum
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        portal_id: Uuid,
        uid: &str,
        user_name: &str,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        self.require_portal(portal_id).await?;

        let mut post = ForumPost::new(
            self.ctx.generate_id(),
            portal_id,
            uid.to_string(),
            user_name.to_string(),
            request.title,
            request.content,
            request.category,
        );
        post.is_announcement = request.is_announcement;
        post.attachment_urls = request.attachment_urls;

        self.ctx.forum_repo().create_post(&post).await?;

        info!(post_id = %post.id, portal_id = %portal_id, "Forum post created");

        Ok(PostResponse::from(&post))
    }

    /// List comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Uuid) -> ServiceResult<Vec<CommentResponse>> {
        self.get_post_entity(post_id).await?;

        let comments = self.ctx.forum_repo().find_comments(post_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Comment on a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        uid: &str,
        user_name: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.get_post_entity(post_id).await?;

        let comment = ForumComment::new(
            self.ctx.generate_id(),
            post_id,
            uid.to_string(),
            user_name.to_string(),
            request.content,
        );

        self.ctx.forum_repo().create_comment(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        Ok(CommentResponse::from(&comment))
    }

    async fn get_post_entity(&self, post_id: Uuid) -> ServiceResult<ForumPost> {
        self.ctx
            .forum_repo()
            .find_post(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Forum post", post_id.to_string()))
    }

    async fn require_portal(&self, portal_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .portal_repo()
            .find_by_id(portal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Portal", portal_id.to_string()))?;
        Ok(())
    }
}
