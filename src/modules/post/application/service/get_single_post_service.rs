use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::outgoing::{CommentFilter, CommentQuery};
use crate::post::application::ports::incoming::use_cases::{
    GetSinglePostError, GetSinglePostUseCase, PostWithComments,
};
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetSinglePostService<P, C>
where
    P: PostQuery,
    C: CommentQuery,
{
    posts: P,
    comments: C,
}

impl<P, C> GetSinglePostService<P, C>
where
    P: PostQuery,
    C: CommentQuery,
{
    pub fn new(posts: P, comments: C) -> Self {
        Self { posts, comments }
    }
}

#[async_trait]
impl<P, C> GetSinglePostUseCase for GetSinglePostService<P, C>
where
    P: PostQuery + Send + Sync,
    C: CommentQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<PostWithComments, GetSinglePostError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| GetSinglePostError::QueryFailed(e.to_string()))?
            .ok_or(GetSinglePostError::NotFound)?;

        let comments = self
            .comments
            .find_all(CommentFilter::OnPost(post_id))
            .await
            .map_err(|e| GetSinglePostError::QueryFailed(e.to_string()))?;

        Ok(PostWithComments { post, comments })
    }
}
