use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::{Post, PostFilter};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<PageResult<Post>, PostQueryError>;

    /// Every matching post, newest first. Used for profiles and cascades,
    /// where the full set is needed.
    async fn find_all(&self, filter: PostFilter) -> Result<Vec<Post>, PostQueryError>;

    async fn count(&self, filter: PostFilter) -> Result<u64, PostQueryError>;
}
