mod delete_post;
mod delete_user;
mod replace_post_image;
mod upload_profile_photo;

pub use delete_post::{__path_delete_post_handler, delete_post_handler};
pub use delete_user::{__path_delete_user_handler, delete_user_handler};
pub use replace_post_image::{__path_update_post_image_handler, update_post_image_handler};
pub use upload_profile_photo::{__path_upload_profile_photo_handler, upload_profile_photo_handler};

use actix_web::HttpResponse;
use tracing::error;

use crate::cascade::application::domain::errors::CascadeError;
use crate::shared::api::ApiResponse;

/// Shared HTTP mapping for cascade failures. Provider and database detail
/// only reaches the log.
fn cascade_error_response(
    err: CascadeError,
    not_found: (&str, &str),
    forbidden_message: &str,
) -> HttpResponse {
    match err {
        CascadeError::NotFound => ApiResponse::not_found(not_found.0, not_found.1),
        CascadeError::Forbidden => ApiResponse::forbidden("FORBIDDEN", forbidden_message),
        e @ CascadeError::ExternalServiceError(_) => {
            error!(error = %e, "Object store call failed");
            ApiResponse::internal_error()
        }
        e @ CascadeError::RepositoryError(_) => {
            error!(error = %e, "Database call failed");
            ApiResponse::internal_error()
        }
    }
}
