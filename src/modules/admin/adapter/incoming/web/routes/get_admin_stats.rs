use actix_web::{get, web, Responder};
use tracing::error;

use crate::admin::application::ports::incoming::use_cases::AdminStats;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Row counts for the dashboard
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "admin",
    responses(
        (status = 200, description = "Counts of users, posts, comments and categories", body = AdminStats),
        (status = 403, description = "Admin only", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/stats")]
pub async fn get_admin_stats_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin_stats_use_case.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(error = %e, "Failed to load admin stats");
            ApiResponse::internal_error()
        }
    }
}
