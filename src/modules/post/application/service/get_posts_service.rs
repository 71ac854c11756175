use async_trait::async_trait;

use crate::post::application::domain::entities::{Post, PostFilter};
use crate::post::application::ports::incoming::use_cases::{
    CountPostsUseCase, GetPostsError, GetPostsUseCase,
};
use crate::post::application::ports::outgoing::PostQuery;
use crate::shared::pagination::{PageRequest, PageResult};

/// Read side for post listings; serves both the page and the count.
#[derive(Clone)]
pub struct GetPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<PageResult<Post>, GetPostsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| GetPostsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q> CountPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, filter: PostFilter) -> Result<u64, GetPostsError> {
        self.query
            .count(filter)
            .await
            .map_err(|e| GetPostsError::QueryFailed(e.to_string()))
    }
}
