use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::post::application::ports::incoming::use_cases::{CreatePostError, CreatePostInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "Ownership in practice")]
    pub title: String,
    #[schema(example = "Notes on borrowing across async boundaries")]
    pub description: String,
    pub category_id: Uuid,
}

/// Create a post. It starts with the default image.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: VerifiedUser,
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = CreatePostInput {
        title: req.title,
        description: req.description,
        category_id: req.category_id,
    };

    match data.post.create.execute(user.actor(), input).await {
        Ok(post) => ApiResponse::created(post),
        Err(CreatePostError::InvalidTitle(msg)) => ApiResponse::bad_request("INVALID_TITLE", &msg),
        Err(CreatePostError::InvalidDescription(msg)) => {
            ApiResponse::bad_request("INVALID_DESCRIPTION", &msg)
        }
        Err(CreatePostError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(e @ CreatePostError::RepositoryError(_)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create post");
            ApiResponse::internal_error()
        }
    }
}
