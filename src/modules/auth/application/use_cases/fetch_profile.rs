use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{PostFilter, PostQuery};

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchUserProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserProfileError>;
}

#[derive(Clone)]
pub struct FetchUserProfileService<Q, P>
where
    Q: UserQuery,
    P: PostQuery,
{
    users: Q,
    posts: P,
}

impl<Q, P> FetchUserProfileService<Q, P>
where
    Q: UserQuery,
    P: PostQuery,
{
    pub fn new(users: Q, posts: P) -> Self {
        Self { users, posts }
    }
}

#[async_trait]
impl<Q, P> FetchUserProfileUseCase for FetchUserProfileService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserProfileError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserProfileError::QueryFailed(e.to_string()))?
            .ok_or(FetchUserProfileError::UserNotFound)?;

        let posts = self
            .posts
            .find_all(PostFilter::by_owner(user_id))
            .await
            .map_err(|e| FetchUserProfileError::QueryFailed(e.to_string()))?;

        Ok(UserProfile { user, posts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{sample_post, sample_user, InMemoryStore};
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_user_with_own_posts_only() {
        let store = InMemoryStore::new();
        let alice = sample_user("alice");
        let bob = sample_user("bob");
        store.insert_user(alice.clone());
        store.insert_user(bob.clone());
        store.insert_post(sample_post(alice.id));
        store.insert_post(sample_post(alice.id));
        store.insert_post(sample_post(bob.id));

        let service = FetchUserProfileService::new(store.clone(), store.clone());
        let profile = service.execute(alice.id).await.unwrap();

        assert_eq!(profile.user.id, alice.id);
        assert_eq!(profile.posts.len(), 2);
        assert!(profile.posts.iter().all(|p| p.owner == alice.id));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = InMemoryStore::new();
        let service = FetchUserProfileService::new(store.clone(), store);

        let err = service
            .execute(UserId::from(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(err, FetchUserProfileError::UserNotFound);
    }
}
