use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToggleLikeError {
    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    /// Likes the post for `actor`, or removes an existing like.
    async fn execute(&self, actor: Actor, post_id: Uuid) -> Result<Post, ToggleLikeError>;
}
