use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::multimedia::application::domain::entities::ImageRef;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: UserId) -> Result<UserActiveModel, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(user.into())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UserAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            bio: Set(None),
            profile_photo_url: Set(data.profile_photo.url),
            profile_photo_public_id: Set(data.profile_photo.public_id),
            is_admin: Set(false),
            is_verified: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;

        if let Some(username) = data.username {
            active_user.username = Set(username);
        }
        if let Some(bio) = data.bio {
            active_user.bio = Set(Some(bio));
        }
        if let Some(password_hash) = data.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.into())
    }

    async fn update_profile_photo(
        &self,
        user_id: UserId,
        photo: ImageRef,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;

        active_user.profile_photo_url = Set(photo.url);
        active_user.profile_photo_public_id = Set(photo.public_id);

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.into())
    }

    async fn activate_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsVerified, Expr::value(true))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
