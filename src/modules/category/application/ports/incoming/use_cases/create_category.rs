use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Only admins may create categories")]
    Forbidden,

    #[error("{0}")]
    InvalidTitle(String),

    #[error("Category already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, title: String) -> Result<Category, CreateCategoryError>;
}
