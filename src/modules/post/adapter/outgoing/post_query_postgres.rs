use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::likes::{with_likes, with_likes_one};
use super::sea_orm_entity::posts::{Column as PostColumn, Entity as PostEntity};
use crate::post::application::domain::entities::{Post, PostFilter};
use crate::post::application::ports::outgoing::{PostQuery, PostQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn filter_condition(filter: &PostFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(owner) = filter.owner {
        condition = condition.add(PostColumn::UserId.eq(owner.value()));
    }
    if let Some(category_id) = filter.category_id {
        condition = condition.add(PostColumn::CategoryId.eq(category_id));
    }
    condition
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let Some(model) = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let post = with_likes_one(&self.db, model).await.map_err(map_db_err)?;
        Ok(Some(post))
    }

    async fn list(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<PageResult<Post>, PostQueryError> {
        let total = PostEntity::find()
            .filter(filter_condition(&filter))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let models = PostEntity::find()
            .filter(filter_condition(&filter))
            .order_by_desc(PostColumn::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = with_likes(&self.db, models).await.map_err(map_db_err)?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn find_all(&self, filter: PostFilter) -> Result<Vec<Post>, PostQueryError> {
        let models = PostEntity::find()
            .filter(filter_condition(&filter))
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        with_likes(&self.db, models).await.map_err(map_db_err)
    }

    async fn count(&self, filter: PostFilter) -> Result<u64, PostQueryError> {
        PostEntity::find()
            .filter(filter_condition(&filter))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
