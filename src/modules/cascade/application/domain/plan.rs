//! Cascades as data. A [`DeletionPlan`] lists every step up front so the
//! ordering rule (remote cleanup strictly before any row is removed) can be
//! checked and tested without running anything.

use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    DestroyImage { public_id: String },
    BulkDestroyImages { public_ids: Vec<String> },
    DeleteCommentsOnPost { post_id: Uuid },
    DeleteCommentsByOwner { owner: UserId },
    DeleteCommentsOnPosts { post_ids: Vec<Uuid> },
    DeletePosts { post_ids: Vec<Uuid> },
    DeletePost { post_id: Uuid },
    DeleteUser { user_id: UserId },
}

impl CascadeStep {
    /// True for steps that talk to the object store.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CascadeStep::DestroyImage { .. } | CascadeStep::BulkDestroyImages { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            CascadeStep::DestroyImage { .. } => "destroy_image",
            CascadeStep::BulkDestroyImages { .. } => "bulk_destroy_images",
            CascadeStep::DeleteCommentsOnPost { .. } => "delete_comments_on_post",
            CascadeStep::DeleteCommentsByOwner { .. } => "delete_comments_by_owner",
            CascadeStep::DeleteCommentsOnPosts { .. } => "delete_comments_on_posts",
            CascadeStep::DeletePosts { .. } => "delete_posts",
            CascadeStep::DeletePost { .. } => "delete_post",
            CascadeStep::DeleteUser { .. } => "delete_user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPlan {
    steps: Vec<CascadeStep>,
}

impl DeletionPlan {
    /// Image (if uploaded), then the post's comments, then the post.
    pub fn for_post(post: &Post) -> Self {
        let mut steps = Vec::with_capacity(3);

        if let Some(public_id) = post.image.public_id() {
            steps.push(CascadeStep::DestroyImage {
                public_id: public_id.to_string(),
            });
        }
        steps.push(CascadeStep::DeleteCommentsOnPost { post_id: post.id });
        steps.push(CascadeStep::DeletePost { post_id: post.id });

        Self { steps }
    }

    /// `posts` must be every post owned by `user`. Rows are removed by the
    /// ids in `posts`, so the rows deleted are the ones whose images were
    /// destroyed.
    ///
    /// All uploaded images go in one bulk call. Comments are removed before
    /// posts and posts before the user, matching the foreign keys.
    pub fn for_user(user: &User, posts: &[Post]) -> Self {
        let mut steps = Vec::with_capacity(5);

        let public_ids: Vec<String> = posts
            .iter()
            .filter_map(|p| p.image.public_id())
            .chain(user.profile_photo.public_id())
            .map(str::to_string)
            .collect();

        if !public_ids.is_empty() {
            steps.push(CascadeStep::BulkDestroyImages { public_ids });
        }

        steps.push(CascadeStep::DeleteCommentsByOwner { owner: user.id });

        if !posts.is_empty() {
            let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
            steps.push(CascadeStep::DeleteCommentsOnPosts {
                post_ids: post_ids.clone(),
            });
            steps.push(CascadeStep::DeletePosts { post_ids });
        }

        steps.push(CascadeStep::DeleteUser { user_id: user.id });

        Self { steps }
    }

    pub fn steps(&self) -> &[CascadeStep] {
        &self.steps
    }

    pub fn has_remote_steps(&self) -> bool {
        self.steps.iter().any(CascadeStep::is_remote)
    }

    /// No remote step comes after a database step.
    pub fn is_remote_first(&self) -> bool {
        match self.steps.iter().position(|s| !s.is_remote()) {
            Some(first_db) => !self.steps[first_db..].iter().any(CascadeStep::is_remote),
            None => true,
        }
    }
}
