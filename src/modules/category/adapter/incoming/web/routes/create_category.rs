use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::category::application::ports::incoming::use_cases::CreateCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Systems programming")]
    pub title: String,
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created"),
        (status = 400, description = "Invalid title", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 409, description = "Title already used", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/categories")]
pub async fn create_category_handler(
    admin: AdminUser,
    req: web::Json<CreateCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .category
        .create
        .execute(admin.actor(), req.into_inner().title)
        .await
    {
        Ok(category) => ApiResponse::created(category),
        Err(CreateCategoryError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Admin access required")
        }
        Err(CreateCategoryError::InvalidTitle(msg)) => {
            ApiResponse::bad_request("INVALID_TITLE", &msg)
        }
        Err(CreateCategoryError::AlreadyExists) => {
            ApiResponse::conflict("CATEGORY_ALREADY_EXISTS", "Category already exists")
        }
        Err(e @ CreateCategoryError::RepositoryError(_)) => {
            error!(error = %e, "Failed to create category");
            ApiResponse::internal_error()
        }
    }
}
