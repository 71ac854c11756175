use async_trait::async_trait;

use super::GetPostsError;
use crate::post::application::domain::entities::PostFilter;

#[async_trait]
pub trait CountPostsUseCase: Send + Sync {
    async fn execute(&self, filter: PostFilter) -> Result<u64, GetPostsError>;
}
