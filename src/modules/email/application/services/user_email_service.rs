use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier, VerificationEmail,
};

#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_url: impl Into<String>) -> Self {
        Self {
            sender,
            app_url: app_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn verification_link(&self, message: &VerificationEmail) -> String {
        format!(
            "{}/api/auth/{}/verify/{}",
            self.app_url, message.user_id, message.token
        )
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        message: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.verification_link(&message);
        let body = format!(
            "<p>Hi {},</p>\
             <p>Click the link below to verify your email address.</p>\
             <p><a href=\"{link}\">Verify</a></p>",
            message.username
        );

        self.sender
            .send_email(&message.email, "Verify your email", &body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}
