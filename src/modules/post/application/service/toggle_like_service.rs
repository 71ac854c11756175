use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{ToggleLikeError, ToggleLikeUseCase};
use crate::post::application::ports::outgoing::{PostRepository, PostRepositoryError};

pub struct ToggleLikeService<R>
where
    R: PostRepository,
{
    repository: R,
}

impl<R> ToggleLikeService<R>
where
    R: PostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ToggleLikeUseCase for ToggleLikeService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, post_id: Uuid) -> Result<Post, ToggleLikeError> {
        self.repository
            .toggle_like(post_id, actor.id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::PostNotFound => ToggleLikeError::NotFound,
                other => ToggleLikeError::RepositoryError(other.to_string()),
            })
    }
}
