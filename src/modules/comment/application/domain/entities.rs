use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const TEXT_MAX: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub owner: UserId,
    /// Copied from the author at creation so listings need no join.
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Selects comments for reads and bulk deletes. No variant selects every
/// comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentFilter {
    OnPost(Uuid),
    OnPosts(Vec<Uuid>),
    ByOwner(UserId),
}

impl CommentFilter {
    pub fn matches(&self, comment: &Comment) -> bool {
        match self {
            CommentFilter::OnPost(post_id) => comment.post_id == *post_id,
            CommentFilter::OnPosts(post_ids) => post_ids.contains(&comment.post_id),
            CommentFilter::ByOwner(owner) => comment.owner == *owner,
        }
    }

    /// True when the filter cannot select anything.
    pub fn is_empty(&self) -> bool {
        matches!(self, CommentFilter::OnPosts(ids) if ids.is_empty())
    }
}

pub fn validate_text(text: &str) -> Result<String, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Comment text is required".to_string());
    }
    if text.chars().count() > TEXT_MAX {
        return Err(format!("Comment must be at most {TEXT_MAX} characters"));
    }
    Ok(text.to_string())
}
