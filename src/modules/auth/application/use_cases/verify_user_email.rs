use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    UserRepository, UserRepositoryError, VerificationTokenRepository,
};
use crate::auth::application::services::token_hasher::hash_token;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyUserEmailError {
    #[error("Invalid verification link")]
    InvalidLink,

    #[error("Verification link has expired")]
    LinkExpired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, token: &str) -> Result<(), VerifyUserEmailError>;
}

#[derive(Clone)]
pub struct VerifyUserEmailService<R, T>
where
    R: UserRepository,
    T: VerificationTokenRepository,
{
    users: R,
    tokens: T,
}

impl<R, T> VerifyUserEmailService<R, T>
where
    R: UserRepository,
    T: VerificationTokenRepository,
{
    pub fn new(users: R, tokens: T) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl<R, T> VerifyUserEmailUseCase for VerifyUserEmailService<R, T>
where
    R: UserRepository + Send + Sync,
    T: VerificationTokenRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, token: &str) -> Result<(), VerifyUserEmailError> {
        let record = self
            .tokens
            .find(user_id, &hash_token(token))
            .await
            .map_err(|e| VerifyUserEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyUserEmailError::InvalidLink)?;

        if record.is_expired() {
            self.tokens
                .delete(record.id)
                .await
                .map_err(|e| VerifyUserEmailError::RepositoryError(e.to_string()))?;
            return Err(VerifyUserEmailError::LinkExpired);
        }

        self.users
            .activate_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyUserEmailError::InvalidLink,
                other => VerifyUserEmailError::RepositoryError(other.to_string()),
            })?;

        // Single use
        self.tokens
            .delete(record.id)
            .await
            .map_err(|e| VerifyUserEmailError::RepositoryError(e.to_string()))?;

        tracing::info!(user_id = %user_id, "Email verified");
        Ok(())
    }
}
