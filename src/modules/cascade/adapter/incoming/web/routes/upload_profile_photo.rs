use actix_web::{post, web, HttpRequest, Responder};

use super::cascade_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::multimedia::adapter::incoming::web::image_payload::image_upload_from_request;
use crate::multimedia::application::domain::entities::ImageFolder;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace your profile photo
#[utoipa::path(
    post,
    path = "/api/users/profile/profile-photo-upload",
    tag = "users",
    request_body(content = Vec<u8>, content_type = "image/png", description = "Raw image bytes"),
    responses(
        (status = 200, description = "User with the new profile photo"),
        (status = 400, description = "Missing, oversized or unsupported image", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/users/profile/profile-photo-upload")]
pub async fn upload_profile_photo_handler(
    user: VerifiedUser,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let actor = user.actor();

    let upload = match image_upload_from_request(
        &req,
        body,
        &data.upload_policy,
        ImageFolder::ProfilePhotos,
    ) {
        Ok(upload) => upload,
        Err(resp) => return resp,
    };

    match data
        .cascade
        .replace_profile_photo
        .execute(actor, actor.id, upload)
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(e) => cascade_error_response(
            e,
            ("USER_NOT_FOUND", "User not found"),
            "You can only change your own profile photo",
        ),
    }
}
