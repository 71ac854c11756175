use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::domain::guard::is_owner_or_admin;
use crate::comment::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentRepositoryError,
};

/// Comments are leaves: deleting one touches nothing else.
pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, comment_id: Uuid) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        if !is_owner_or_admin(comment.owner, &actor) {
            warn!(%comment_id, actor = %actor.id, "Rejected comment delete");
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => DeleteCommentError::NotFound,
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })?;

        info!(%comment_id, actor = %actor.id, "Comment deleted");
        Ok(())
    }
}
