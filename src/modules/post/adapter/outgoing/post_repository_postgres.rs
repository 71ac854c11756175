use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::likes::{into_post, with_likes_one};
use super::sea_orm_entity::post_likes::{
    ActiveModel as LikeActiveModel, Column as LikeColumn, Entity as LikeEntity,
};
use super::sea_orm_entity::posts::{
    ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::multimedia::application::domain::entities::ImageRef;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{
    CreatePostData, PostRepository, PostRepositoryError, UpdatePostData,
};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, post_id: Uuid) -> Result<PostActiveModel, PostRepositoryError> {
        let post = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostRepositoryError::PostNotFound)?;

        Ok(post.into())
    }

    async fn save(&self, active: PostActiveModel) -> Result<Post, PostRepositoryError> {
        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        with_likes_one(&self.db, updated).await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    match e {
        DbErr::RecordNotUpdated => PostRepositoryError::PostNotFound,
        other => PostRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        let active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            category_id: Set(data.category_id),
            title: Set(data.title),
            description: Set(data.description),
            image_url: Set(data.image.url),
            image_public_id: Set(data.image.public_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(into_post(inserted, Vec::new()))
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<Post, PostRepositoryError> {
        let mut active = self.load(post_id).await?;

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(category_id) = data.category_id {
            active.category_id = Set(category_id);
        }

        self.save(active).await
    }

    async fn update_image(
        &self,
        post_id: Uuid,
        image: ImageRef,
    ) -> Result<Post, PostRepositoryError> {
        let mut active = self.load(post_id).await?;

        active.image_url = Set(image.url);
        active.image_public_id = Set(image.public_id);

        self.save(active).await
    }

    async fn toggle_like(&self, post_id: Uuid, user: UserId) -> Result<Post, PostRepositoryError> {
        let post = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostRepositoryError::PostNotFound)?;

        let removed = LikeEntity::delete_many()
            .filter(LikeColumn::PostId.eq(post_id))
            .filter(LikeColumn::UserId.eq(user.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if removed.rows_affected == 0 {
            let like = LikeActiveModel {
                post_id: Set(post_id),
                user_id: Set(user.value()),
                created_at: NotSet,
            };

            // A concurrent toggle may have inserted the same pair already.
            LikeEntity::insert(like)
                .on_conflict(
                    OnConflict::columns([LikeColumn::PostId, LikeColumn::UserId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&*self.db)
                .await
                .map_err(map_db_err)?;
        }

        with_likes_one(&self.db, post).await.map_err(map_db_err)
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let result = PostEntity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::PostNotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, post_ids: &[Uuid]) -> Result<u64, PostRepositoryError> {
        if post_ids.is_empty() {
            return Ok(0);
        }

        let result = PostEntity::delete_many()
            .filter(PostColumn::Id.is_in(post_ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
