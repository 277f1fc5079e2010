//! Forum post and comment model -> entity mappers

use relief_core::entities::{ForumComment, ForumPost};
use relief_core::error::DomainError;

use crate::models::{ForumCommentModel, ForumPostModel};

impl TryFrom<ForumPostModel> for ForumPost {
    type Error = DomainError;

    fn try_from(model: ForumPostModel) -> Result<Self, Self::Error> {
        Ok(ForumPost {
            id: model.id,
            portal_id: model.portal_id,
            user_id: model.user_id,
            user_name: model.user_name,
            title: model.title,
            content: model.content,
            category: model.category.parse()?,
            is_announcement: model.is_announcement,
            attachment_urls: model.attachment_urls,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<ForumCommentModel> for ForumComment {
    type Error = DomainError;

    fn try_from(model: ForumCommentModel) -> Result<Self, Self::Error> {
        Ok(ForumComment {
            id: model.id,
            post_id: model.post_id,
            user_id: model.user_id,
            user_name: model.user_name,
            content: model.content,
            created_at: model.created_at,
        })
    }
}
