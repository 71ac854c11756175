use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::multimedia::application::domain::entities::ImageRef;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub category_id: Uuid,
    pub image: ImageRef,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
}

impl UpdatePostData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError>;

    async fn update_post(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<Post, PostRepositoryError>;

    /// Single-field write of the image reference.
    async fn update_image(&self, post_id: Uuid, image: ImageRef)
        -> Result<Post, PostRepositoryError>;

    /// Adds `user` to the likes when absent, removes it otherwise.
    async fn toggle_like(&self, post_id: Uuid, user: UserId) -> Result<Post, PostRepositoryError>;

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;

    /// Removes exactly the listed posts and returns the number of rows
    /// removed. An empty list touches nothing.
    async fn delete_many(&self, post_ids: &[Uuid]) -> Result<u64, PostRepositoryError>;
}
