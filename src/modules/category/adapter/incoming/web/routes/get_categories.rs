use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// List every category
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses((status = 200, description = "All categories, alphabetical"))
)]
#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            ApiResponse::internal_error()
        }
    }
}
