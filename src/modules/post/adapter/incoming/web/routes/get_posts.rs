use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::post::application::domain::entities::PostFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PostListQuery {
    /// 1-based page
    pub page: Option<u32>,
    /// Page size, max 100
    pub per_page: Option<u32>,
    pub category_id: Option<Uuid>,
}

impl PostListQuery {
    fn filter(&self) -> PostFilter {
        PostFilter {
            category_id: self.category_id,
            ..Default::default()
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PostCountResponse {
    pub count: u64,
}

/// List posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(PostListQuery),
    responses((status = 200, description = "A page of posts"))
)]
#[get("/api/posts")]
pub async fn get_posts_handler(
    query: web::Query<PostListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page);

    match data.post.get_list.execute(query.filter(), page).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "Failed to list posts");
            ApiResponse::internal_error()
        }
    }
}

/// Count posts, optionally within one category
#[utoipa::path(
    get,
    path = "/api/posts/count",
    tag = "posts",
    params(PostListQuery),
    responses((status = 200, description = "Number of posts", body = PostCountResponse))
)]
#[get("/api/posts/count")]
pub async fn count_posts_handler(
    query: web::Query<PostListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.count.execute(query.filter()).await {
        Ok(count) => ApiResponse::success(PostCountResponse { count }),
        Err(e) => {
            error!(error = %e, "Failed to count posts");
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

    async fn get(store: &InMemoryStore, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::in_memory(store).build())
                .service(count_posts_handler)
                .service(get_posts_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn lists_without_authentication() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        for _ in 0..3 {
            store.insert_post(sample_post(alice.id));
        }

        let (status, body) = get(&store, "/api/posts?page=1&per_page=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 3);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn filters_by_category() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let target = store.insert_post(sample_post(alice.id));
        store.insert_post(sample_post(alice.id));

        let (_, body) = get(
            &store,
            &format!("/api/posts?category_id={}", target.category_id),
        )
        .await;

        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["id"], target.id.to_string());
    }

    #[actix_web::test]
    async fn counts_posts() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        store.insert_post(sample_post(alice.id));
        store.insert_post(sample_post(alice.id));

        let (status, body) = get(&store, "/api/posts/count").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], 2);
    }
}
