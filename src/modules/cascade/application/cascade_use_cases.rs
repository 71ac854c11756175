use std::sync::Arc;

use crate::cascade::application::ports::incoming::use_cases::{
    DeletePostUseCase, DeleteUserUseCase, ReplacePostImageUseCase, ReplaceProfilePhotoUseCase,
};

#[derive(Clone)]
pub struct CascadeUseCases {
    pub delete_post: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub replace_post_image: Arc<dyn ReplacePostImageUseCase + Send + Sync>,
    pub replace_profile_photo: Arc<dyn ReplaceProfilePhotoUseCase + Send + Sync>,
}
