use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, User, UserId};
use crate::cascade::application::domain::errors::CascadeError;
use crate::multimedia::application::domain::entities::ImageUpload;

#[async_trait]
pub trait ReplaceProfilePhotoUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        user_id: UserId,
        upload: ImageUpload,
    ) -> Result<User, CascadeError>;
}
