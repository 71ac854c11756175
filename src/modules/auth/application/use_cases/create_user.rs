use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, CreateUserData, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::auth::application::services::credentials_policy::{
    validate_email, validate_password, validate_username,
};
use crate::multimedia::application::domain::entities::ImageRef;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserOutput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> CreateUserUseCase for CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        // 1️⃣ Validate input
        let username =
            validate_username(&input.username).map_err(CreateUserError::InvalidUsername)?;
        let email = validate_email(&input.email).map_err(CreateUserError::InvalidEmail)?;
        validate_password(&input.password).map_err(CreateUserError::InvalidPassword)?;

        // 2️⃣ Uniqueness checks (the unique indexes are the final word)
        let by_email = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if by_email.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        let by_username = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if by_username.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        // 3️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // 4️⃣ Persist
        let user = self
            .repository
            .create_user(CreateUserData {
                username,
                email,
                password_hash,
                profile_photo: ImageRef::default_profile_photo(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        Ok(CreateUserOutput {
            user_id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::tests::support::in_memory::{sample_user, InMemoryStore};

    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    fn service(store: &InMemoryStore) -> CreateUserService<InMemoryStore, InMemoryStore> {
        CreateUserService::new(store.clone(), store.clone(), Arc::new(PlainHasher))
    }

    fn input(username: &str, email: &str, password: &str) -> CreateUserInput {
        CreateUserInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn creates_user_with_hashed_password_and_default_photo() {
        let store = InMemoryStore::new();

        let out = service(&store)
            .execute(input("alice", "Alice@Example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(out.username, "alice");
        assert_eq!(out.email, "alice@example.com");

        let stored = store.user(out.user_id).unwrap();
        assert_eq!(stored.password_hash, "hashed:password123");
        assert!(!stored.is_verified);
        assert_eq!(stored.profile_photo, ImageRef::default_profile_photo());
    }

    #[tokio::test]
    async fn rejects_invalid_username() {
        let store = InMemoryStore::new();

        let err = service(&store)
            .execute(input("a b", "a@example.com", "password123"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::InvalidUsername(_)));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn rejects_short_password() {
        let store = InMemoryStore::new();

        let err = service(&store)
            .execute(input("alice", "a@example.com", "short"))
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUserError::InvalidPassword(_)));
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let store = InMemoryStore::new();
        let mut existing = sample_user("bob");
        existing.email = "taken@example.com".to_string();
        store.insert_user(existing);

        let err = service(&store)
            .execute(input("alice", "taken@example.com", "password123"))
            .await
            .unwrap_err();

        assert_eq!(err, CreateUserError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn rejects_duplicate_username() {
        let store = InMemoryStore::new();
        store.insert_user(sample_user("alice"));

        let err = service(&store)
            .execute(input("alice", "other@example.com", "password123"))
            .await
            .unwrap_err();

        assert_eq!(err, CreateUserError::UserAlreadyExists);
    }
}
