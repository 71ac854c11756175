mod count_posts;
mod create_post;
mod get_posts;
mod get_single_post;
mod toggle_like;
mod update_post;

pub use count_posts::CountPostsUseCase;
pub use create_post::{CreatePostError, CreatePostInput, CreatePostUseCase};
pub use get_posts::{GetPostsError, GetPostsUseCase};
pub use get_single_post::{GetSinglePostError, GetSinglePostUseCase, PostWithComments};
pub use toggle_like::{ToggleLikeError, ToggleLikeUseCase};
pub use update_post::{UpdatePostError, UpdatePostInput, UpdatePostUseCase};
