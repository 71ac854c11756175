use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, UserInfo};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation shape of the login body; the handler deserializes
/// straight into the validated `LoginRequest`.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub is_admin: bool,
    pub profile_photo_url: String,
}

impl From<UserInfo> for LoginUserInfo {
    fn from(user: UserInfo) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            is_verified: user.is_verified,
            is_admin: user.is_admin,
            profile_photo_url: user.profile_photo.url,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUserInfo,
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    let email = request.email().to_string();

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                user: response.user.into(),
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(email = %email, "Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(email = %email, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
