use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::verify_user_email::VerifyUserEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    #[schema(example = "Your account has been verified")]
    pub message: String,
}

/// Verify an email address from the emailed link
#[utoipa::path(
    get,
    path = "/api/auth/{user_id}/verify/{token}",
    tag = "auth",
    params(
        ("user_id" = Uuid, Path, description = "Account being verified"),
        ("token" = String, Path, description = "Raw verification token from the email"),
    ),
    responses(
        (status = 200, description = "Account verified", body = inline(SuccessResponse<VerifyEmailResponse>)),
        (status = 400, description = "Invalid or expired link", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/{user_id}/verify/{token}")]
pub async fn verify_user_email_handler(
    path: web::Path<(Uuid, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, token) = path.into_inner();

    match data
        .verify_user_email_use_case
        .execute(UserId::from(user_id), &token)
        .await
    {
        Ok(()) => {
            info!(user_id = %user_id, "Email verified");
            ApiResponse::success(VerifyEmailResponse {
                message: "Your account has been verified".to_string(),
            })
        }

        Err(VerifyUserEmailError::InvalidLink) => {
            warn!(user_id = %user_id, "Invalid verification link");
            ApiResponse::bad_request("INVALID_VERIFICATION_LINK", "Invalid verification link")
        }

        Err(VerifyUserEmailError::LinkExpired) => {
            ApiResponse::bad_request("VERIFICATION_LINK_EXPIRED", "Verification link has expired")
        }

        Err(VerifyUserEmailError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}
