use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::post::application::ports::incoming::use_cases::GetSinglePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch a post together with its comments
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with comments"),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[get("/api/posts/{post_id}")]
pub async fn get_single_post_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_single.execute(post_id).await {
        Ok(found) => ApiResponse::success(found),
        Err(GetSinglePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(e) => {
            error!(%post_id, error = %e, "Failed to load post");
            ApiResponse::internal_error()
        }
    }
}
