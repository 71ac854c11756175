use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Failed to fetch users: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<User>, ListUsersError>;
}

#[async_trait]
pub trait CountUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, ListUsersError>;
}

#[derive(Clone)]
pub struct ListUsersService<Q: UserQuery> {
    query: Q,
}

impl<Q: UserQuery> ListUsersService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<User>, ListUsersError> {
        self.query
            .list(page)
            .await
            .map_err(|e| ListUsersError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q> CountUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<u64, ListUsersError> {
        self.query
            .count()
            .await
            .map_err(|e| ListUsersError::QueryFailed(e.to_string()))
    }
}
