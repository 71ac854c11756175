use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::VerificationTokenRepository;
use crate::auth::application::services::token_hasher::{generate_raw_token, hash_token};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, CreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotifier, VerificationEmail,
};

pub const DEFAULT_VERIFICATION_TTL_HOURS: i64 = 24;
const EMAIL_MAX_RETRIES: u32 = 3;

// ============================================================================
// Registration Output with Message
// ============================================================================
#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
    pub message: String,
}

impl From<CreateUserOutput> for UserRegistrationOutput {
    fn from(output: CreateUserOutput) -> Self {
        Self {
            user_id: output.user_id,
            email: output.email,
            username: output.username,
            message: "We sent you an email, please verify your email address".to_string(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================================================================
// User Registration Orchestrator
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
    verification_tokens: Arc<dyn VerificationTokenRepository + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    token_ttl: ChronoDuration,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
        verification_tokens: Arc<dyn VerificationTokenRepository + Send + Sync>,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            verification_tokens,
            email_notifier,
            token_ttl: ChronoDuration::hours(DEFAULT_VERIFICATION_TTL_HOURS),
        }
    }

    pub fn with_token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl = ChronoDuration::hours(hours.max(1));
        self
    }

    /// Creates the account, stores a hashed verification token and sends
    /// the verification link in the background.
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(input).await?;

        let raw_token = generate_raw_token();
        self.verification_tokens
            .create(
                created_user.user_id,
                hash_token(&raw_token),
                Utc::now() + self.token_ttl,
            )
            .await
            .map_err(|e| UserRegistrationError::TokenGenerationFailed(e.to_string()))?;

        let email_notifier = self.email_notifier.clone();
        let message = VerificationEmail {
            user_id: created_user.user_id,
            username: created_user.username.clone(),
            email: created_user.email.clone(),
            token: raw_token,
        };

        tokio::spawn(async move {
            for attempt in 1..=EMAIL_MAX_RETRIES {
                match email_notifier.send_verification_email(message.clone()).await {
                    Ok(_) => return,
                    Err(e) if attempt < EMAIL_MAX_RETRIES => {
                        tracing::warn!(
                            user_id = %message.user_id,
                            attempt,
                            error = %e,
                            "Verification email failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            user_id = %message.user_id,
                            error = %e,
                            "All verification email attempts failed"
                        );
                    }
                }
            }
        });

        Ok(created_user.into())
    }
}
