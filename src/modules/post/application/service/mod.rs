pub mod create_post_service;
pub mod get_posts_service;
pub mod get_single_post_service;
pub mod toggle_like_service;
pub mod update_post_service;

pub use create_post_service::CreatePostService;
pub use get_posts_service::GetPostsService;
pub use get_single_post_service::GetSinglePostService;
pub use toggle_like_service::ToggleLikeService;
pub use update_post_service::UpdatePostService;
