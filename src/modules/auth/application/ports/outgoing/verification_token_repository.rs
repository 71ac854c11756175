use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Stored verification token. Only the SHA-256 hash of the raw token is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationTokenRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

impl VerificationTokenRecord {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationTokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VerificationTokenRepository: Send + Sync {
    async fn create(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationTokenRecord, VerificationTokenRepositoryError>;

    async fn find(
        &self,
        user_id: UserId,
        token_hash: &str,
    ) -> Result<Option<VerificationTokenRecord>, VerificationTokenRepositoryError>;

    async fn delete(&self, token_id: Uuid) -> Result<(), VerificationTokenRepositoryError>;
}
