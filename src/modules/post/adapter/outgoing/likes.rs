//! Likes live in a join table; both post adapters stitch them back onto
//! the post rows they load.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use uuid::Uuid;

use super::sea_orm_entity::post_likes::{Column as LikeColumn, Entity as LikeEntity};
use super::sea_orm_entity::posts::Model as PostModel;
use crate::auth::application::domain::entities::UserId;
use crate::multimedia::application::domain::entities::ImageRef;
use crate::post::application::domain::entities::Post;

pub(super) fn into_post(model: PostModel, likes: Vec<UserId>) -> Post {
    Post {
        id: model.id,
        owner: UserId::from(model.user_id),
        title: model.title,
        description: model.description,
        category_id: model.category_id,
        image: ImageRef {
            url: model.image_url,
            public_id: model.image_public_id,
        },
        likes,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

pub(super) async fn with_likes(
    db: &DatabaseConnection,
    models: Vec<PostModel>,
) -> Result<Vec<Post>, DbErr> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let rows = LikeEntity::find()
        .filter(LikeColumn::PostId.is_in(ids))
        .order_by_asc(LikeColumn::CreatedAt)
        .all(db)
        .await?;

    let mut by_post: HashMap<Uuid, Vec<UserId>> = HashMap::new();
    for row in rows {
        by_post
            .entry(row.post_id)
            .or_default()
            .push(UserId::from(row.user_id));
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let likes = by_post.remove(&m.id).unwrap_or_default();
            into_post(m, likes)
        })
        .collect())
}

pub(super) async fn with_likes_one(
    db: &DatabaseConnection,
    model: PostModel,
) -> Result<Post, DbErr> {
    let mut posts = with_likes(db, vec![model]).await?;
    posts
        .pop()
        .ok_or_else(|| DbErr::Custom("post vanished while loading likes".to_string()))
}
