use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{Actor, User, UserId};
use crate::auth::application::domain::guard::is_owner;
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::credentials_policy::{
    validate_bio, validate_password, validate_username,
};

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("You can only update your own profile")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Nothing to update")]
    NothingToUpdate,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid bio: {0}")]
    InvalidBio(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<User, UpdateProfileError>;
}

#[derive(Clone)]
pub struct UpdateUserProfileService<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> UpdateUserProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> UpdateUserProfileUseCase for UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<User, UpdateProfileError> {
        if !is_owner(user_id, &actor) {
            return Err(UpdateProfileError::Forbidden);
        }

        let mut data = UpdateUserData::default();

        if let Some(username) = input.username.as_deref() {
            data.username =
                Some(validate_username(username).map_err(UpdateProfileError::InvalidUsername)?);
        }

        if let Some(bio) = input.bio.as_deref() {
            data.bio = Some(validate_bio(bio).map_err(UpdateProfileError::InvalidBio)?);
        }

        if let Some(password) = input.password.as_deref() {
            validate_password(password).map_err(UpdateProfileError::InvalidPassword)?;
            let hash = self
                .password_hasher
                .hash_password(password)
                .await
                .map_err(|e| UpdateProfileError::HashingFailed(e.to_string()))?;
            data.password_hash = Some(hash);
        }

        if data.is_empty() {
            return Err(UpdateProfileError::NothingToUpdate);
        }

        self.repository
            .update_user(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => UpdateProfileError::UsernameTaken,
                UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
            })
    }
}
