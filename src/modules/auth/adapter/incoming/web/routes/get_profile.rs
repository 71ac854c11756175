use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::fetch_profile::FetchUserProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation shape of a public profile
#[derive(Serialize, ToSchema)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
    pub profile_photo_url: String,
    pub is_verified: bool,
    /// Posts written by this user, newest first
    #[schema(value_type = Vec<Object>)]
    pub posts: Vec<serde_json::Value>,
}

/// Get a user's public profile with their posts
#[utoipa::path(
    get,
    path = "/api/users/profile/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/users/profile/{user_id}")]
pub async fn get_user_profile_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.user.fetch_profile.execute(UserId::from(user_id)).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchUserProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchUserProfileError::QueryFailed(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to fetch profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{sample_post, sample_user, InMemoryStore};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn profile_includes_posts_and_hides_password() {
        let store = InMemoryStore::new();
        let user = sample_user("alice");
        store.insert_user(user.clone());
        store.insert_post(sample_post(user.id));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(&store).build())
                .service(get_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/profile/{}", user.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["username"], "alice");
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 1);
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn unknown_user_is_not_found() {
        let store = InMemoryStore::new();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(&store).build())
                .service(get_user_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/profile/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
