use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::multimedia::application::domain::entities::ImageRef;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub category_id: Uuid,
    pub image: ImageRef,
    pub likes: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }
}

/// Narrowing criteria for post reads and bulk deletes. An empty filter
/// selects every post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub owner: Option<UserId>,
    pub category_id: Option<Uuid>,
}

impl PostFilter {
    pub fn by_owner(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ..Default::default()
        }
    }

    pub fn by_category(category_id: Uuid) -> Self {
        Self {
            category_id: Some(category_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.owner.map_or(true, |o| post.owner == o)
            && self.category_id.map_or(true, |c| post.category_id == c)
    }
}
