use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminStats {
    pub users: u64,
    pub posts: u64,
    pub comments: u64,
    pub categories: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetAdminStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetAdminStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<AdminStats, GetAdminStatsError>;
}
