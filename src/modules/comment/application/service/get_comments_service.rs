use async_trait::async_trait;

use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::incoming::use_cases::{
    GetCommentsError, GetCommentsUseCase,
};
use crate::comment::application::ports::outgoing::CommentQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct GetCommentsService<Q>
where
    Q: CommentQuery,
{
    query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Comment>, GetCommentsError> {
        self.query
            .list(page)
            .await
            .map_err(|e| GetCommentsError::QueryFailed(e.to_string()))
    }
}
