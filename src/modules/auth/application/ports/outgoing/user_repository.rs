use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::multimedia::application::domain::entities::ImageRef;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_photo: ImageRef,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub password_hash: Option<String>,
}

impl UpdateUserData {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.bio.is_none() && self.password_hash.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError>;

    /// Single-field write of the profile photo reference.
    async fn update_profile_photo(
        &self,
        user_id: UserId,
        photo: ImageRef,
    ) -> Result<User, UserRepositoryError>;

    async fn activate_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
