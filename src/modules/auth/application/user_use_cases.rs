use std::sync::Arc;

use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase,
    list_users::{CountUsersUseCase, ListUsersUseCase},
    update_profile::UpdateUserProfileUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub fetch_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub count: Arc<dyn CountUsersUseCase + Send + Sync>,
}
