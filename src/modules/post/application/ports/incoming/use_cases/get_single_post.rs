use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;
use crate::post::application::domain::entities::Post;

/// A post with its comments, oldest comment first.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithComments {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSinglePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSinglePostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<PostWithComments, GetSinglePostError>;
}
