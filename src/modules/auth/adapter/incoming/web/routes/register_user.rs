use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// 3-30 characters: letters, digits, underscore
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    /// Minimum 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "We sent you an email, please verify your email address")]
    message: String,
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "johndoe")]
    username: String,
    #[schema(example = "john@example.com")]
    email: String,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    let (code, message) = match err {
        CreateUserError::InvalidUsername(msg) => ("INVALID_USERNAME", msg),
        CreateUserError::InvalidEmail(msg) => ("INVALID_EMAIL", msg),
        CreateUserError::InvalidPassword(msg) => ("INVALID_PASSWORD", msg),

        CreateUserError::UserAlreadyExists => {
            warn!(username = %req.username, email = %req.email, "User already exists");
            return ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists");
        }

        other => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %other,
                "Unhandled user creation error"
            );
            return ApiResponse::internal_error();
        }
    };

    warn!(
        username = %req.username,
        email = %req.email,
        error = %message,
        "Invalid registration input"
    );
    ApiResponse::bad_request(code, &message)
}

/// Register a new user
///
/// Creates an unverified account and emails a verification link.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisterUserResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, email = %req.email, "User registration attempt");

    let input = CreateUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.register_user_orchestrator.register_user(input).await {
        Ok(user) => {
            info!(user_id = %user.user_id, username = %user.username, "User created successfully");

            ApiResponse::created(RegisterUserResponse {
                message: user.message,
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    username: user.username,
                    email: user.email,
                },
            })
        }

        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &req),

        Err(e) => {
            error!(username = %req.username, error = %e, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}
