use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct UserCountResponse {
    pub count: u64,
}

/// List users, newest first (admin only)
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    params(
        ("page" = Option<u32>, Query, description = "1-based page"),
        ("per_page" = Option<u32>, Query, description = "Page size, max 100"),
    ),
    responses(
        (status = 200, description = "A page of users"),
        (status = 403, description = "Admin only", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/profile")]
pub async fn list_users_handler(
    _admin: AdminUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.list.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

/// Count users (admin only)
#[utoipa::path(
    get,
    path = "/api/users/count",
    tag = "users",
    responses(
        (status = 200, description = "Number of users", body = UserCountResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/count")]
pub async fn count_users_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.user.count.execute().await {
        Ok(count) => ApiResponse::success(UserCountResponse { count }),
        Err(e) => {
            error!(error = %e, "Failed to count users");
            ApiResponse::internal_error()
        }
    }
}
