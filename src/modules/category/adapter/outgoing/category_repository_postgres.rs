use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::{
    ActiveModel as CategoryActiveModel, Entity as CategoryEntity,
};
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};

#[derive(Clone, Debug)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

// The lower(title) unique index raises 23505 on a case-insensitive duplicate.
fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return CategoryRepositoryError::CategoryAlreadyExists;
    }
    CategoryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            title: Set(data.title),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }
        Ok(())
    }
}
