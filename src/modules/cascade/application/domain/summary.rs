use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDeletionSummary {
    pub post_id: Uuid,
    pub deleted_comments_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDeletionSummary {
    pub user_id: Uuid,
    pub deleted_posts_count: u64,
    pub deleted_comments_count: u64,
}
