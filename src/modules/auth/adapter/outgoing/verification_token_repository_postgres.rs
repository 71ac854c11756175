use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    VerificationTokenRecord, VerificationTokenRepository, VerificationTokenRepositoryError,
};

use super::sea_orm_entity::verification_tokens::{
    ActiveModel as TokenActiveModel, Column as TokenColumn, Entity as TokenEntity,
    Model as TokenModel,
};

#[derive(Clone, Debug)]
pub struct VerificationTokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationTokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> VerificationTokenRepositoryError {
    VerificationTokenRepositoryError::DatabaseError(e.to_string())
}

fn to_record(model: TokenModel) -> VerificationTokenRecord {
    VerificationTokenRecord {
        id: model.id,
        user_id: UserId::from(model.user_id),
        token_hash: model.token_hash,
        expires_at: model.expires_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl VerificationTokenRepository for VerificationTokenRepositoryPostgres {
    async fn create(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationTokenRecord, VerificationTokenRepositoryError> {
        let active = TokenActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.value()),
            token_hash: Set(token_hash),
            expires_at: Set(expires_at.into()),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_record(inserted))
    }

    async fn find(
        &self,
        user_id: UserId,
        token_hash: &str,
    ) -> Result<Option<VerificationTokenRecord>, VerificationTokenRepositoryError> {
        let token = TokenEntity::find()
            .filter(TokenColumn::UserId.eq(user_id.value()))
            .filter(TokenColumn::TokenHash.eq(token_hash))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(token.map(to_record))
    }

    async fn delete(&self, token_id: Uuid) -> Result<(), VerificationTokenRepositoryError> {
        TokenEntity::delete_by_id(token_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
