use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::post::application::ports::incoming::use_cases::{UpdatePostError, UpdatePostInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are left unchanged
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Edit your own post's text or category
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post"),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Post or category not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/posts/{post_id}")]
pub async fn update_post_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let req = req.into_inner();
    let input = UpdatePostInput {
        title: req.title,
        description: req.description,
        category_id: req.category_id,
    };

    match data.post.update.execute(user.actor(), post_id, input).await {
        Ok(post) => ApiResponse::success(post),
        Err(UpdatePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(UpdatePostError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only edit your own posts")
        }
        Err(UpdatePostError::NothingToUpdate) => {
            ApiResponse::bad_request("NOTHING_TO_UPDATE", "No fields to update")
        }
        Err(UpdatePostError::InvalidTitle(msg)) => ApiResponse::bad_request("INVALID_TITLE", &msg),
        Err(UpdatePostError::InvalidDescription(msg)) => {
            ApiResponse::bad_request("INVALID_DESCRIPTION", &msg)
        }
        Err(UpdatePostError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(e @ UpdatePostError::RepositoryError(_)) => {
            error!(%post_id, error = %e, "Failed to update post");
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

    async fn call(
        store: &InMemoryStore,
        caller: Uuid,
        admin: bool,
        post_id: Uuid,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(store).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(update_post_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{post_id}"))
            .insert_header(("Authorization", bearer(caller, true, admin)))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn author_edits_description() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let post = store.insert_post(sample_post(alice.id));

        let (status, body) = call(
            &store,
            alice.id.value(),
            false,
            post.id,
            json!({"description": "A rewritten description"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["description"], "A rewritten description");
    }

    #[actix_web::test]
    async fn admin_cannot_edit_foreign_post() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let post = store.insert_post(sample_post(alice.id));

        let (status, body) = call(
            &store,
            Uuid::new_v4(),
            true,
            post.id,
            json!({"title": "Moderated"}),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}
