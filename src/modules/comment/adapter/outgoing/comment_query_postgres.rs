use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments::{
    filter_condition, Column as CommentColumn, Entity as CommentEntity,
};
use crate::comment::application::domain::entities::{Comment, CommentFilter};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError> {
        let comment = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(comment.map(Comment::from))
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<Comment>, CommentQueryError> {
        let total = CommentEntity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let comments = CommentEntity::find()
            .order_by_desc(CommentColumn::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: comments.into_iter().map(Comment::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn find_all(&self, filter: CommentFilter) -> Result<Vec<Comment>, CommentQueryError> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }

        let comments = CommentEntity::find()
            .filter(filter_condition(&filter))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn count(&self) -> Result<u64, CommentQueryError> {
        CommentEntity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
