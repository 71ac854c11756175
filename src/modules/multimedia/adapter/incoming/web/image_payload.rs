use actix_web::{http::header, web, HttpRequest, HttpResponse};

use crate::multimedia::application::domain::entities::{
    ImageFolder, ImageUpload, ImageUploadError,
};
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::shared::api::ApiResponse;

/// Builds a validated upload from a raw request body and its `Content-Type`.
pub fn image_upload_from_request(
    req: &HttpRequest,
    body: web::Bytes,
    policy: &UploadPolicy,
    folder: ImageFolder,
) -> Result<ImageUpload, HttpResponse> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    ImageUpload::try_new(body.to_vec(), content_type, policy, folder)
        .map_err(map_image_upload_error)
}

fn map_image_upload_error(err: ImageUploadError) -> HttpResponse {
    match err {
        ImageUploadError::Empty => ApiResponse::bad_request("NO_IMAGE_PROVIDED", "No image provided"),
        ImageUploadError::TooLarge { .. } => {
            ApiResponse::bad_request("IMAGE_TOO_LARGE", &err.to_string())
        }
        ImageUploadError::UnsupportedType(_) => ApiResponse::bad_request(
            "UNSUPPORTED_IMAGE_TYPE",
            "Only image/jpeg, image/png and image/webp are accepted",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn policy() -> UploadPolicy {
        UploadPolicy::new("bucket".to_string())
    }

    #[test]
    fn builds_upload_from_content_type_header() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "image/webp"))
            .to_http_request();

        let upload = image_upload_from_request(
            &req,
            web::Bytes::from_static(b"abc"),
            &policy(),
            ImageFolder::Posts,
        )
        .unwrap();

        assert_eq!(upload.content_type(), "image/webp");
        assert_eq!(upload.bytes(), b"abc");
    }

    #[test]
    fn missing_content_type_is_bad_request() {
        let req = TestRequest::default().to_http_request();

        let resp = image_upload_from_request(
            &req,
            web::Bytes::from_static(b"abc"),
            &policy(),
            ImageFolder::Posts,
        )
        .unwrap_err();

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_body_is_bad_request() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .to_http_request();

        let resp = image_upload_from_request(&req, web::Bytes::new(), &policy(), ImageFolder::Posts)
            .unwrap_err();

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
