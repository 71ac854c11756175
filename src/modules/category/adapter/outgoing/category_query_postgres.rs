use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::{Column as CategoryColumn, Entity as CategoryEntity};
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

#[derive(Clone, Debug)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CategoryQueryError {
    CategoryQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn find_all(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let categories = CategoryEntity::find()
            .order_by_asc(CategoryColumn::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CategoryQueryError> {
        let category = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(category.map(Category::from))
    }

    async fn count(&self) -> Result<u64, CategoryQueryError> {
        CategoryEntity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
