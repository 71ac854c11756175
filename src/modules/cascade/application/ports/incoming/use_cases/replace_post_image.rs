use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::cascade::application::domain::errors::CascadeError;
use crate::multimedia::application::domain::entities::ImageUpload;
use crate::post::application::domain::entities::Post;

#[async_trait]
pub trait ReplacePostImageUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        post_id: Uuid,
        upload: ImageUpload,
    ) -> Result<Post, CascadeError>;
}
