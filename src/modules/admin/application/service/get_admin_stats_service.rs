use async_trait::async_trait;

use crate::admin::application::ports::incoming::use_cases::{
    AdminStats, GetAdminStatsError, GetAdminStatsUseCase,
};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::comment::application::ports::outgoing::CommentQuery;
use crate::post::application::ports::outgoing::{PostFilter, PostQuery};

pub struct GetAdminStatsService<U, P, C, K>
where
    U: UserQuery,
    P: PostQuery,
    C: CommentQuery,
    K: CategoryQuery,
{
    users: U,
    posts: P,
    comments: C,
    categories: K,
}

impl<U, P, C, K> GetAdminStatsService<U, P, C, K>
where
    U: UserQuery,
    P: PostQuery,
    C: CommentQuery,
    K: CategoryQuery,
{
    pub fn new(users: U, posts: P, comments: C, categories: K) -> Self {
        Self {
            users,
            posts,
            comments,
            categories,
        }
    }
}

fn failed(e: impl std::fmt::Display) -> GetAdminStatsError {
    GetAdminStatsError::QueryFailed(e.to_string())
}

#[async_trait]
impl<U, P, C, K> GetAdminStatsUseCase for GetAdminStatsService<U, P, C, K>
where
    U: UserQuery + Send + Sync,
    P: PostQuery + Send + Sync,
    C: CommentQuery + Send + Sync,
    K: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<AdminStats, GetAdminStatsError> {
        let (users, posts, comments, categories) = tokio::try_join!(
            async { self.users.count().await.map_err(failed) },
            async { self.posts.count(PostFilter::default()).await.map_err(failed) },
            async { self.comments.count().await.map_err(failed) },
            async { self.categories.count().await.map_err(failed) },
        )?;

        Ok(AdminStats {
            users,
            posts,
            comments,
            categories,
        })
    }
}
