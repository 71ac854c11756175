use async_trait::async_trait;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError>;
}
