use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments::{
    filter_condition, ActiveModel as CommentActiveModel, Entity as CommentEntity,
};
use crate::comment::application::domain::entities::{Comment, CommentFilter};
use crate::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CreateCommentData,
};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(data.post_id),
            user_id: Set(data.owner.value()),
            username: Set(data.username),
            text: Set(data.text),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn update_text(
        &self,
        comment_id: Uuid,
        text: String,
    ) -> Result<Comment, CommentRepositoryError> {
        let mut active: CommentActiveModel = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CommentRepositoryError::CommentNotFound)?
            .into();

        active.text = Set(text);

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.into())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::CommentNotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, filter: &CommentFilter) -> Result<u64, CommentRepositoryError> {
        if filter.is_empty() {
            return Ok(0);
        }

        let result = CommentEntity::delete_many()
            .filter(filter_condition(filter))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
