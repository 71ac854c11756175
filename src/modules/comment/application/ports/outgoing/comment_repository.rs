use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{Comment, CommentFilter};

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub post_id: Uuid,
    pub owner: UserId,
    pub username: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, CommentRepositoryError>;

    async fn update_text(
        &self,
        comment_id: Uuid,
        text: String,
    ) -> Result<Comment, CommentRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;

    /// Returns the number of rows removed.
    async fn delete_many(&self, filter: &CommentFilter) -> Result<u64, CommentRepositoryError>;
}
