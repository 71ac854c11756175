use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::update_profile::{UpdateProfileError, UpdateProfileInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are left unchanged
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "john_doe")]
    pub username: Option<String>,
    #[schema(example = "Rustacean and occasional blogger")]
    pub bio: Option<String>,
    pub password: Option<String>,
}

/// Update your own profile
#[utoipa::path(
    put,
    path = "/api/users/profile/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "Must be the caller's own id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not your profile", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username taken", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/users/profile/{user_id}")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let req = req.into_inner();
    let input = UpdateProfileInput {
        username: req.username,
        bio: req.bio,
        password: req.password,
    };

    match data
        .user
        .update_profile
        .execute(user.actor(), UserId::from(user_id), input)
        .await
    {
        Ok(updated) => {
            info!(user_id = %user_id, "Profile updated");
            ApiResponse::success(updated)
        }

        Err(UpdateProfileError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only update your own profile")
        }
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::NothingToUpdate) => {
            ApiResponse::bad_request("NOTHING_TO_UPDATE", "No fields to update")
        }
        Err(UpdateProfileError::InvalidUsername(msg)) => {
            ApiResponse::bad_request("INVALID_USERNAME", &msg)
        }
        Err(UpdateProfileError::InvalidBio(msg)) => ApiResponse::bad_request("INVALID_BIO", &msg),
        Err(UpdateProfileError::InvalidPassword(msg)) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &msg)
        }
        Err(UpdateProfileError::UsernameTaken) => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }
        Err(
            e @ (UpdateProfileError::HashingFailed(_) | UpdateProfileError::RepositoryError(_)),
        ) => {
            error!(user_id = %user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
