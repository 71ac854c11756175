use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Actor;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::multimedia::application::domain::entities::ImageRef;
use crate::post::application::domain::entities::Post;
use crate::post::application::domain::rules::{validate_description, validate_title};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostInput, CreatePostUseCase,
};
use crate::post::application::ports::outgoing::{CreatePostData, PostRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePostService<R, C>
where
    R: PostRepository,
    C: CategoryQuery,
{
    post_repository: R,
    category_query: C,
}

impl<R, C> CreatePostService<R, C>
where
    R: PostRepository,
    C: CategoryQuery,
{
    pub fn new(post_repository: R, category_query: C) -> Self {
        Self {
            post_repository,
            category_query,
        }
    }
}

#[async_trait]
impl<R, C> CreatePostUseCase for CreatePostService<R, C>
where
    R: PostRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        input: CreatePostInput,
    ) -> Result<Post, CreatePostError> {
        let title = validate_title(&input.title).map_err(CreatePostError::InvalidTitle)?;
        let description =
            validate_description(&input.description).map_err(CreatePostError::InvalidDescription)?;

        self.category_query
            .find_by_id(input.category_id)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?
            .ok_or(CreatePostError::CategoryNotFound)?;

        // Posts start with the shared default image; the caller uploads a
        // real one through the image replacement endpoint.
        let post = self
            .post_repository
            .create_post(CreatePostData {
                owner: actor.id,
                title,
                description,
                category_id: input.category_id,
                image: ImageRef::default_post_image(),
            })
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        info!(post_id = %post.id, owner = %post.owner, "Post created");
        Ok(post)
    }
}
