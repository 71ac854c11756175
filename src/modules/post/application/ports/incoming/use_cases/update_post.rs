use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author may edit this post")]
    Forbidden,

    #[error("Nothing to update")]
    NothingToUpdate,

    #[error("{0}")]
    InvalidTitle(String),

    #[error("{0}")]
    InvalidDescription(String),

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> Result<Post, UpdatePostError>;
}
