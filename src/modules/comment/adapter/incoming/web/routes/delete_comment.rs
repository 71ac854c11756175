use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::comment::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteCommentResponse {
    pub comment_id: Uuid,
}

/// Delete a comment (author or admin)
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = "comments",
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted", body = DeleteCommentResponse),
        (status = 403, description = "Not the author or an admin", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data.comment.delete.execute(user.actor(), comment_id).await {
        Ok(()) => ApiResponse::success(DeleteCommentResponse { comment_id }),
        Err(DeleteCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(DeleteCommentError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "Only the author or an admin can delete this comment",
        ),
        Err(e @ DeleteCommentError::RepositoryError(_)) => {
            error!(%comment_id, error = %e, "Failed to delete comment");
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

    async fn delete_as(store: &InMemoryStore, caller: Uuid, admin: bool, id: Uuid) -> StatusCode {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(store).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_comment_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/comments/{id}"))
            .insert_header(("Authorization", bearer(caller, true, admin)))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn stranger_cannot_delete() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let post = store.insert_post(sample_post(alice.id));
        let comment = store.insert_comment(sample_comment(post.id, alice.id));

        let status = delete_as(&store, Uuid::new_v4(), false, comment.id).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(store.comment(comment.id).is_some());
    }

    #[actix_web::test]
    async fn admin_deletes_comment() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let post = store.insert_post(sample_post(alice.id));
        let comment = store.insert_comment(sample_comment(post.id, alice.id));

        let status = delete_as(&store, Uuid::new_v4(), true, comment.id).await;

        assert_eq!(status, StatusCode::OK);
        assert!(store.comment(comment.id).is_none());
    }
}
