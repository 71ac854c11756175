use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::comment::application::ports::incoming::use_cases::UpdateCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    pub text: String,
}

/// Edit your own comment
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = "comments",
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Updated comment"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/comments/{comment_id}")]
pub async fn update_comment_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data
        .comment
        .update
        .execute(user.actor(), comment_id, req.into_inner().text)
        .await
    {
        Ok(comment) => ApiResponse::success(comment),
        Err(UpdateCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(UpdateCommentError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only edit your own comments")
        }
        Err(UpdateCommentError::InvalidText(msg)) => ApiResponse::bad_request("INVALID_TEXT", &msg),
        Err(e @ UpdateCommentError::RepositoryError(_)) => {
            error!(%comment_id, error = %e, "Failed to update comment");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::in_memory::{
        sample_comment, sample_post, sample_user, InMemoryStore,
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn author_updates_comment() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let post = store.insert_post(sample_post(alice.id));
        let comment = store.insert_comment(sample_comment(post.id, alice.id));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(&store).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(update_comment_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/comments/{}", comment.id))
            .insert_header(("Authorization", bearer(alice.id.value(), true, false)))
            .set_json(json!({"text": "edited"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["text"], "edited");
    }
}
