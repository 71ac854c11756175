use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::category::application::ports::incoming::use_cases::DeleteCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteCategoryResponse {
    pub category_id: Uuid,
}

/// Delete a category (admin only). Posts keep their category id.
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = "categories",
    params(("category_id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = DeleteCategoryResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/categories/{category_id}")]
pub async fn delete_category_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data
        .category
        .delete
        .execute(admin.actor(), category_id)
        .await
    {
        Ok(()) => ApiResponse::success(DeleteCategoryResponse { category_id }),
        Err(DeleteCategoryError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_ONLY", "Admin access required")
        }
        Err(DeleteCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(e @ DeleteCategoryError::RepositoryError(_)) => {
            error!(%category_id, error = %e, "Failed to delete category");
            ApiResponse::internal_error()
        }
    }
}
