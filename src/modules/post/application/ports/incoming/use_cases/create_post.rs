use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::post::application::domain::entities::Post;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub description: String,
    pub category_id: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePostError {
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
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, input: CreatePostInput)
        -> Result<Post, CreatePostError>;
}
