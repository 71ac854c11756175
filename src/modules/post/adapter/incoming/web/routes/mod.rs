mod create_post;
mod get_posts;
mod get_single_post;
mod toggle_like;
mod update_post;

pub use create_post::{__path_create_post_handler, create_post_handler, CreatePostRequest};
pub use get_posts::{
    __path_count_posts_handler, __path_get_posts_handler, count_posts_handler, get_posts_handler,
    PostCountResponse, PostListQuery,
};
pub use get_single_post::{__path_get_single_post_handler, get_single_post_handler};
pub use toggle_like::{__path_toggle_like_handler, toggle_like_handler};
pub use update_post::{__path_update_post_handler, update_post_handler, UpdatePostRequest};
