use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::cascade_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a post together with its image and every comment on it
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted, with the number of comments removed"),
        (status = 403, description = "Neither author nor admin", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/posts/{post_id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .cascade
        .delete_post
        .execute(user.actor(), post_id)
        .await
    {
        Ok(summary) => ApiResponse::success(summary),
        Err(e) => cascade_error_response(
            e,
            ("POST_NOT_FOUND", "Post not found"),
            "You can only delete your own posts",
        ),
    }
}
