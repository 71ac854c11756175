use crate::auth::application::ports::outgoing::{UserQueryError, UserRepositoryError};
use crate::comment::application::ports::outgoing::CommentRepositoryError;
use crate::post::application::ports::outgoing::{PostQueryError, PostRepositoryError};

/// Failure of a cascade or image replacement.
///
/// `ExternalServiceError` carries the provider message for logs; handlers
/// never echo it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CascadeError {
    #[error("Resource not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for CascadeError {
    fn from(e: UserQueryError) -> Self {
        CascadeError::RepositoryError(e.to_string())
    }
}

impl From<PostQueryError> for CascadeError {
    fn from(e: PostQueryError) -> Self {
        CascadeError::RepositoryError(e.to_string())
    }
}

impl From<CommentRepositoryError> for CascadeError {
    fn from(e: CommentRepositoryError) -> Self {
        CascadeError::RepositoryError(e.to_string())
    }
}

// A row vanishing between load and write means a concurrent delete won.
impl From<PostRepositoryError> for CascadeError {
    fn from(e: PostRepositoryError) -> Self {
        match e {
            PostRepositoryError::PostNotFound => CascadeError::NotFound,
            other => CascadeError::RepositoryError(other.to_string()),
        }
    }
}

impl From<UserRepositoryError> for CascadeError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => CascadeError::NotFound,
            other => CascadeError::RepositoryError(other.to_string()),
        }
    }
}
