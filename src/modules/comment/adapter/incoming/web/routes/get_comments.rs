use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::AppState;

/// List all comments, newest first (admin only)
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "comments",
    params(
        ("page" = Option<u32>, Query, description = "1-based page"),
        ("per_page" = Option<u32>, Query, description = "Page size, max 100"),
    ),
    responses(
        (status = 200, description = "A page of comments"),
        (status = 403, description = "Admin only", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/comments")]
pub async fn get_comments_handler(
    _admin: AdminUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .comment
        .get_list
        .execute(query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "Failed to list comments");
            ApiResponse::internal_error()
        }
    }
}
