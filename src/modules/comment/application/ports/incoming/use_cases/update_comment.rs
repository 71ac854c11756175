use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author may edit this comment")]
    Forbidden,

    #[error("{0}")]
    InvalidText(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        comment_id: Uuid,
        text: String,
    ) -> Result<Comment, UpdateCommentError>;
}
