use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::domain::guard::is_owner;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::post::application::domain::entities::Post;
use crate::post::application::domain::rules::{validate_description, validate_title};
use crate::post::application::ports::incoming::use_cases::{
    UpdatePostError, UpdatePostInput, UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::{
    PostQuery, PostRepository, PostRepositoryError, UpdatePostData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdatePostService<Q, R, C>
where
    Q: PostQuery,
    R: PostRepository,
    C: CategoryQuery,
{
    query: Q,
    repository: R,
    categories: C,
}

impl<Q, R, C> UpdatePostService<Q, R, C>
where
    Q: PostQuery,
    R: PostRepository,
    C: CategoryQuery,
{
    pub fn new(query: Q, repository: R, categories: C) -> Self {
        Self {
            query,
            repository,
            categories,
        }
    }

    fn validate(&self, input: UpdatePostInput) -> Result<UpdatePostData, UpdatePostError> {
        let title = input
            .title
            .as_deref()
            .map(validate_title)
            .transpose()
            .map_err(UpdatePostError::InvalidTitle)?;

        let description = input
            .description
            .as_deref()
            .map(validate_description)
            .transpose()
            .map_err(UpdatePostError::InvalidDescription)?;

        Ok(UpdatePostData {
            title,
            description,
            category_id: input.category_id,
        })
    }
}

#[async_trait]
impl<Q, R, C> UpdatePostUseCase for UpdatePostService<Q, R, C>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> Result<Post, UpdatePostError> {
        let data = self.validate(input)?;
        if data.is_empty() {
            return Err(UpdatePostError::NothingToUpdate);
        }

        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::NotFound)?;

        // Editing stays with the author; admins moderate by deleting.
        if !is_owner(post.owner, &actor) {
            warn!(%post_id, actor = %actor.id, "Rejected post update from non-owner");
            return Err(UpdatePostError::Forbidden);
        }

        if let Some(category_id) = data.category_id {
            self.categories
                .find_by_id(category_id)
                .await
                .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
                .ok_or(UpdatePostError::CategoryNotFound)?;
        }

        let updated = self
            .repository
            .update_post(post_id, data)
            .await
            .map_err(|e| match e {
                PostRepositoryError::PostNotFound => UpdatePostError::NotFound,
                other => UpdatePostError::RepositoryError(other.to_string()),
            })?;

        info!(%post_id, "Post updated");
        Ok(updated)
    }
}
