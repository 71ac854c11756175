use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::cascade::application::domain::errors::CascadeError;
use crate::cascade::application::domain::summary::PostDeletionSummary;

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    /// Owner or admin. Removes the image, the post's comments and the post.
    async fn execute(
        &self,
        actor: Actor,
        post_id: Uuid,
    ) -> Result<PostDeletionSummary, CascadeError>;
}
