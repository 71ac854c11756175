use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentError, CreateCommentInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub post_id: Uuid,
    #[schema(example = "Thanks, this cleared things up")]
    pub text: String,
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/comments")]
pub async fn create_comment_handler(
    user: VerifiedUser,
    req: web::Json<CreateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = CreateCommentInput {
        post_id: req.post_id,
        text: req.text,
    };

    match data.comment.create.execute(user.actor(), input).await {
        Ok(comment) => ApiResponse::created(comment),
        Err(CreateCommentError::InvalidText(msg)) => ApiResponse::bad_request("INVALID_TEXT", &msg),
        Err(CreateCommentError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(CreateCommentError::AuthorNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ CreateCommentError::RepositoryError(_)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create comment");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::in_memory::{sample_post, sample_user, InMemoryStore};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn verified_user_comments_on_post() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let bob = store.insert_user(sample_user("bob"));
        let post = store.insert_post(sample_post(alice.id));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(&store).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(create_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/comments")
            .insert_header(("Authorization", bearer(bob.id.value(), true, false)))
            .set_json(json!({"post_id": post.id, "text": "Nice one"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["username"], "bob");
        assert_eq!(body["data"]["post_id"], post.id.to_string());
    }

    #[actix_web::test]
    async fn missing_post_is_404() {
        let store = InMemoryStore::new();
        let bob = store.insert_user(sample_user("bob"));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(&store).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(create_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/comments")
            .insert_header(("Authorization", bearer(bob.id.value(), true, false)))
            .set_json(json!({"post_id": Uuid::new_v4(), "text": "Nice one"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
