use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::cascade_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an account with all of its posts, comments and images
#[utoipa::path(
    delete,
    path = "/api/users/profile/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "Account to delete")),
    responses(
        (status = 200, description = "Account deleted, with counts of removed posts and comments"),
        (status = 403, description = "Neither the account owner nor admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/users/profile/{user_id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data
        .cascade
        .delete_user
        .execute(user.actor(), user_id)
        .await
    {
        Ok(summary) => ApiResponse::success(summary),
        Err(e) => cascade_error_response(
            e,
            ("USER_NOT_FOUND", "User not found"),
            "You can only delete your own account",
        ),
    }
}
