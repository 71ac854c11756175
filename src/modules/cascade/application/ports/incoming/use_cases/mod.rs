mod delete_post;
mod delete_user;
mod replace_post_image;
mod replace_profile_photo;

pub use delete_post::DeletePostUseCase;
pub use delete_user::DeleteUserUseCase;
pub use replace_post_image::ReplacePostImageUseCase;
pub use replace_profile_photo::ReplaceProfilePhotoUseCase;
