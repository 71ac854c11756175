use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone)]
pub struct CreateCommentInput {
    pub post_id: Uuid,
    pub text: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCommentError {
    #[error("{0}")]
    InvalidText(String),

    #[error("Post not found")]
    PostNotFound,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        input: CreateCommentInput,
    ) -> Result<Comment, CreateCommentError>;
}
