use async_trait::async_trait;

use crate::comment::application::domain::entities::Comment;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Comment>, GetCommentsError>;
}
