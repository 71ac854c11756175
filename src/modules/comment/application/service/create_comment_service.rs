use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::comment::application::domain::entities::{validate_text, Comment};
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentError, CreateCommentInput, CreateCommentUseCase,
};
use crate::comment::application::ports::outgoing::{CommentRepository, CreateCommentData};
use crate::post::application::ports::outgoing::PostQuery;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateCommentService<R, P, U>
where
    R: CommentRepository,
    P: PostQuery,
    U: UserQuery,
{
    repository: R,
    posts: P,
    users: U,
}

impl<R, P, U> CreateCommentService<R, P, U>
where
    R: CommentRepository,
    P: PostQuery,
    U: UserQuery,
{
    pub fn new(repository: R, posts: P, users: U) -> Self {
        Self {
            repository,
            posts,
            users,
        }
    }
}

#[async_trait]
impl<R, P, U> CreateCommentUseCase for CreateCommentService<R, P, U>
where
    R: CommentRepository + Send + Sync,
    P: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        input: CreateCommentInput,
    ) -> Result<Comment, CreateCommentError> {
        let text = validate_text(&input.text).map_err(CreateCommentError::InvalidText)?;

        self.posts
            .find_by_id(input.post_id)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::PostNotFound)?;

        // A valid token can outlive its account.
        let author = self
            .users
            .find_by_id(actor.id)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::AuthorNotFound)?;

        self.repository
            .create_comment(CreateCommentData {
                post_id: input.post_id,
                owner: actor.id,
                username: author.username,
                text,
            })
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{sample_post, sample_user, InMemoryStore};
    use uuid::Uuid;

    fn service(
        store: &InMemoryStore,
    ) -> CreateCommentService<InMemoryStore, InMemoryStore, InMemoryStore> {
        CreateCommentService::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn stores_comment_with_author_username() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let bob = store.insert_user(sample_user("bob"));
        let post = store.insert_post(sample_post(alice.id));

        let comment = service(&store)
            .execute(
                Actor::new(bob.id, false),
                CreateCommentInput {
                    post_id: post.id,
                    text: " Great read ".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(comment.username, "bob");
        assert_eq!(comment.text, "Great read");
        assert_eq!(store.comments_on(post.id).len(), 1);
    }

    #[tokio::test]
    async fn unknown_post_is_rejected() {
        let store = InMemoryStore::new();
        let bob = store.insert_user(sample_user("bob"));

        let err = service(&store)
            .execute(
                Actor::new(bob.id, false),
                CreateCommentInput {
                    post_id: Uuid::new_v4(),
                    text: "hello".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CreateCommentError::PostNotFound);
        assert_eq!(store.comment_count(), 0);
    }

    #[tokio::test]
    async fn deleted_author_is_rejected() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let post = store.insert_post(sample_post(alice.id));

        let err = service(&store)
            .execute(
                Actor::new(Uuid::new_v4(), false),
                CreateCommentInput {
                    post_id: post.id,
                    text: "hello".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CreateCommentError::AuthorNotFound);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let store = InMemoryStore::new();

        let err = service(&store)
            .execute(
                Actor::new(Uuid::new_v4(), false),
                CreateCommentInput {
                    post_id: Uuid::new_v4(),
                    text: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CreateCommentError::InvalidText(_)));
    }
}
