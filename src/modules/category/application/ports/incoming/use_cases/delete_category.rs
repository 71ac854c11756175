use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("Only admins may delete categories")]
    Forbidden,

    #[error("Category not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    /// Posts filed under the category keep its id.
    async fn execute(&self, actor: Actor, category_id: Uuid) -> Result<(), DeleteCategoryError>;
}
