use sea_orm::entity::prelude::*;
use sea_orm::Condition;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{Comment, CommentFilter};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
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

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            owner: UserId::from(model.user_id),
            username: model.username,
            text: model.text,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

pub fn filter_condition(filter: &CommentFilter) -> Condition {
    match filter {
        CommentFilter::OnPost(post_id) => Condition::all().add(Column::PostId.eq(*post_id)),
        CommentFilter::OnPosts(post_ids) => {
            Condition::all().add(Column::PostId.is_in(post_ids.iter().copied()))
        }
        CommentFilter::ByOwner(owner) => Condition::all().add(Column::UserId.eq(owner.value())),
    }
}
