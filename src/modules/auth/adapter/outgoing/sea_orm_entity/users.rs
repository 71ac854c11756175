use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{User, UserId};
use crate::multimedia::application::domain::entities::ImageRef;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub profile_photo_url: String,
    pub profile_photo_public_id: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: UserId::from(model.id),
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            bio: model.bio,
            profile_photo: ImageRef {
                url: model.profile_photo_url,
                public_id: model.profile_photo_public_id,
            },
            is_admin: model.is_admin,
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
