use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct VerificationEmail {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    /// Raw token; only its hash is persisted.
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        message: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError>;
}
