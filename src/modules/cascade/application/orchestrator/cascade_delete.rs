use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::auth::application::domain::guard::is_owner_or_admin;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::cascade::application::domain::errors::CascadeError;
use crate::cascade::application::domain::plan::{CascadeStep, DeletionPlan};
use crate::cascade::application::domain::summary::{PostDeletionSummary, UserDeletionSummary};
use crate::cascade::application::ports::incoming::use_cases::{
    DeletePostUseCase, DeleteUserUseCase,
};
use crate::comment::application::ports::outgoing::{CommentFilter, CommentRepository};
use crate::multimedia::application::ports::outgoing::{ObjectStore, ObjectStoreError};
use crate::post::application::ports::outgoing::{PostFilter, PostQuery, PostRepository};

// ============================================================================
// Step execution
// ============================================================================

#[derive(Debug, Default)]
struct Tally {
    comments: u64,
    posts: u64,
}

/// `NotFound` from the store means the object is already gone.
fn remote_result(step: &CascadeStep, result: Result<(), ObjectStoreError>) -> Result<(), CascadeError> {
    match result {
        Ok(()) => Ok(()),
        Err(ObjectStoreError::NotFound) => {
            debug!(step = step.name(), "Remote object already absent");
            Ok(())
        }
        Err(e) => {
            error!(step = step.name(), error = %e, "Remote cleanup failed, nothing deleted");
            Err(CascadeError::ExternalServiceError(e.to_string()))
        }
    }
}

// ============================================================================
// Cascade Delete Orchestrator
// ============================================================================

#[derive(Clone)]
pub struct CascadeDeleteOrchestrator {
    users: Arc<dyn UserQuery + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    posts: Arc<dyn PostQuery + Send + Sync>,
    post_repository: Arc<dyn PostRepository + Send + Sync>,
    comment_repository: Arc<dyn CommentRepository + Send + Sync>,
    object_store: Arc<dyn ObjectStore + Send + Sync>,
}

impl CascadeDeleteOrchestrator {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        posts: Arc<dyn PostQuery + Send + Sync>,
        post_repository: Arc<dyn PostRepository + Send + Sync>,
        comment_repository: Arc<dyn CommentRepository + Send + Sync>,
        object_store: Arc<dyn ObjectStore + Send + Sync>,
    ) -> Self {
        Self {
            users,
            user_repository,
            posts,
            post_repository,
            comment_repository,
            object_store,
        }
    }

    async fn apply(&self, step: &CascadeStep, tally: &mut Tally) -> Result<(), CascadeError> {
        match step {
            CascadeStep::DestroyImage { public_id } => {
                remote_result(step, self.object_store.destroy(public_id).await)
            }
            CascadeStep::BulkDestroyImages { public_ids } => {
                remote_result(step, self.object_store.bulk_destroy(public_ids).await)
            }
            CascadeStep::DeleteCommentsOnPost { post_id } => {
                tally.comments += self
                    .comment_repository
                    .delete_many(&CommentFilter::OnPost(*post_id))
                    .await?;
                Ok(())
            }
            CascadeStep::DeleteCommentsByOwner { owner } => {
                tally.comments += self
                    .comment_repository
                    .delete_many(&CommentFilter::ByOwner(*owner))
                    .await?;
                Ok(())
            }
            CascadeStep::DeleteCommentsOnPosts { post_ids } => {
                tally.comments += self
                    .comment_repository
                    .delete_many(&CommentFilter::OnPosts(post_ids.clone()))
                    .await?;
                Ok(())
            }
            CascadeStep::DeletePosts { post_ids } => {
                tally.posts += self.post_repository.delete_many(post_ids).await?;
                Ok(())
            }
            CascadeStep::DeletePost { post_id } => {
                self.post_repository.delete_post(*post_id).await?;
                tally.posts += 1;
                Ok(())
            }
            CascadeStep::DeleteUser { user_id } => {
                self.user_repository.delete_user(*user_id).await?;
                Ok(())
            }
        }
    }

    /// Runs every step in order and stops at the first failure. Nothing is
    /// retried or rolled back.
    async fn run(&self, plan: &DeletionPlan) -> Result<Tally, CascadeError> {
        debug_assert!(plan.is_remote_first());

        let mut tally = Tally::default();
        for (completed, step) in plan.steps().iter().enumerate() {
            if let Err(e) = self.apply(step, &mut tally).await {
                if completed > 0 && !step.is_remote() {
                    error!(
                        step = step.name(),
                        completed_steps = completed,
                        error = %e,
                        "Cascade stopped part way, data is inconsistent"
                    );
                }
                return Err(e);
            }
            debug!(step = step.name(), "Cascade step done");
        }
        Ok(tally)
    }
}

#[async_trait]
impl DeletePostUseCase for CascadeDeleteOrchestrator {
    async fn execute(
        &self,
        actor: Actor,
        post_id: Uuid,
    ) -> Result<PostDeletionSummary, CascadeError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(CascadeError::NotFound)?;

        if !is_owner_or_admin(post.owner, &actor) {
            warn!(%post_id, actor = %actor.id, "Rejected post delete");
            return Err(CascadeError::Forbidden);
        }

        let tally = self.run(&DeletionPlan::for_post(&post)).await?;

        info!(
            %post_id,
            actor = %actor.id,
            deleted_comments = tally.comments,
            "Post deleted"
        );

        Ok(PostDeletionSummary {
            post_id,
            deleted_comments_count: tally.comments,
        })
    }
}

#[async_trait]
impl DeleteUserUseCase for CascadeDeleteOrchestrator {
    async fn execute(
        &self,
        actor: Actor,
        user_id: UserId,
    ) -> Result<UserDeletionSummary, CascadeError> {
        // Guard runs before the lookup: a stranger gets 403 for any id.
        if !is_owner_or_admin(user_id, &actor) {
            warn!(%user_id, actor = %actor.id, "Rejected account delete");
            return Err(CascadeError::Forbidden);
        }

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CascadeError::NotFound)?;

        let posts = self.posts.find_all(PostFilter::by_owner(user_id)).await?;

        let tally = self.run(&DeletionPlan::for_user(&user, &posts)).await?;

        info!(
            %user_id,
            actor = %actor.id,
            deleted_posts = tally.posts,
            deleted_comments = tally.comments,
            "Account deleted"
        );

        Ok(UserDeletionSummary {
            user_id: user_id.value(),
            deleted_posts_count: tally.posts,
            deleted_comments_count: tally.comments,
        })
    }
}
