mod create_comment;
mod delete_comment;
mod get_comments;
mod update_comment;

pub use create_comment::{
    __path_create_comment_handler, create_comment_handler, CreateCommentRequest,
};
pub use delete_comment::{
    __path_delete_comment_handler, delete_comment_handler, DeleteCommentResponse,
};
pub use get_comments::{__path_get_comments_handler, get_comments_handler};
pub use update_comment::{
    __path_update_comment_handler, update_comment_handler, UpdateCommentRequest,
};
