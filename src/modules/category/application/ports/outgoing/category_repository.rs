use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub owner: UserId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category already exists")]
    CategoryAlreadyExists,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Titles are unique ignoring case.
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
