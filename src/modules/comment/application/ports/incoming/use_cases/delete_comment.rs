use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author or an admin may delete this comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, comment_id: Uuid) -> Result<(), DeleteCommentError>;
}
