use async_trait::async_trait;

use crate::post::application::domain::entities::{Post, PostFilter};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<PageResult<Post>, GetPostsError>;
}
