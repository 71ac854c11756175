pub mod comment_query;
pub mod comment_repository;

pub use crate::comment::application::domain::entities::CommentFilter;
pub use comment_query::{CommentQuery, CommentQueryError};
pub use comment_repository::{CommentRepository, CommentRepositoryError, CreateCommentData};
