use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::domain::guard::is_owner;
use crate::comment::application::domain::entities::{validate_text, Comment};
use crate::comment::application::ports::incoming::use_cases::{
    UpdateCommentError, UpdateCommentUseCase,
};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentRepositoryError,
};

pub struct UpdateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateCommentUseCase for UpdateCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        comment_id: Uuid,
        text: String,
    ) -> Result<Comment, UpdateCommentError> {
        let text = validate_text(&text).map_err(UpdateCommentError::InvalidText)?;

        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| UpdateCommentError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCommentError::NotFound)?;

        if !is_owner(comment.owner, &actor) {
            warn!(%comment_id, actor = %actor.id, "Rejected comment edit from non-owner");
            return Err(UpdateCommentError::Forbidden);
        }

        self.repository
            .update_text(comment_id, text)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => UpdateCommentError::NotFound,
                other => UpdateCommentError::RepositoryError(other.to_string()),
            })
    }
}
