use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::post::application::ports::incoming::use_cases::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Like a post, or take a previous like back
#[utoipa::path(
    put,
    path = "/api/posts/like/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with updated likes"),
        (status = 404, description = "Post not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/posts/like/{post_id}")]
pub async fn toggle_like_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.toggle_like.execute(user.actor(), post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(ToggleLikeError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(e) => {
            error!(%post_id, error = %e, "Failed to toggle like");
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
    use serde_json::Value;

    #[actix_web::test]
    async fn like_then_unlike() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let bob = store.insert_user(sample_user("bob"));
        let post = store.insert_post(sample_post(alice.id));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(&store).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(toggle_like_handler),
        )
        .await;

        for expected in [1usize, 0] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/posts/like/{}", post.id))
                .insert_header(("Authorization", bearer(bob.id.value(), true, false)))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["data"]["likes"].as_array().unwrap().len(), expected);
        }
    }
}
