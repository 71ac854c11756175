use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Alphabetical by title.
    async fn find_all(&self) -> Result<Vec<Category>, CategoryQueryError>;
    async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CategoryQueryError>;
    async fn count(&self) -> Result<u64, CategoryQueryError>;
}
