use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::cascade::application::domain::errors::CascadeError;
use crate::cascade::application::domain::summary::UserDeletionSummary;

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    /// Self or admin. Removes every image, comment and post tied to the user.
    async fn execute(
        &self,
        actor: Actor,
        user_id: UserId,
    ) -> Result<UserDeletionSummary, CascadeError>;
}
