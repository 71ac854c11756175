use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier, VerificationEmail,
};

/// Reversible "hash" so tests can assert on stored values.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Default, Clone)]
pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_verification_email(
        &self,
        _message: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}
