use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::{Comment, CommentFilter};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError>;

    /// Every comment, newest first.
    async fn list(&self, page: PageRequest) -> Result<PageResult<Comment>, CommentQueryError>;

    /// Matching comments, oldest first.
    async fn find_all(&self, filter: CommentFilter) -> Result<Vec<Comment>, CommentQueryError>;

    async fn count(&self) -> Result<u64, CommentQueryError>;
}
