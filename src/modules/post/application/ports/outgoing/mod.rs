pub mod post_query;
pub mod post_repository;

pub use crate::post::application::domain::entities::PostFilter;
pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{CreatePostData, PostRepository, PostRepositoryError, UpdatePostData};
