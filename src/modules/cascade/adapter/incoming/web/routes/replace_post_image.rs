use actix_web::{put, web, HttpRequest, Responder};
use uuid::Uuid;

use super::cascade_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::multimedia::adapter::incoming::web::image_payload::image_upload_from_request;
use crate::multimedia::application::domain::entities::ImageFolder;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the image of your own post
///
/// The body is the raw image; `Content-Type` must be jpeg, png or webp.
#[utoipa::path(
    put,
    path = "/api/posts/update-image/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body(content = Vec<u8>, content_type = "image/png", description = "Raw image bytes"),
    responses(
        (status = 200, description = "Post with the new image"),
        (status = 400, description = "Missing, oversized or unsupported image", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/posts/update-image/{post_id}")]
pub async fn update_post_image_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let upload =
        match image_upload_from_request(&req, body, &data.upload_policy, ImageFolder::Posts) {
            Ok(upload) => upload,
            Err(resp) => return resp,
        };

    match data
        .cascade
        .replace_post_image
        .execute(user.actor(), post_id, upload)
        .await
    {
        Ok(post) => ApiResponse::success(post),
        Err(e) => cascade_error_response(
            e,
            ("POST_NOT_FOUND", "Post not found"),
            "You can only change the image of your own posts",
        ),
    }
}
