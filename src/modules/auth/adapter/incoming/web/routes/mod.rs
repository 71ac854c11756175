mod get_profile;
mod list_users;
mod login_user;
mod register_user;
mod update_profile;
mod verify_email;

pub use get_profile::{
    __path_get_user_profile_handler, get_user_profile_handler, UserProfileResponse,
};
pub use list_users::{
    __path_count_users_handler, __path_list_users_handler, count_users_handler, list_users_handler,
    UserCountResponse,
};
pub use login_user::{
    __path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo,
};
pub use register_user::{
    __path_register_user_handler, register_user_handler, CreateUserRequest, RegisterUserResponse,
    RegisteredUser,
};
pub use update_profile::{
    __path_update_user_profile_handler, update_user_profile_handler, UpdateUserRequest,
};
pub use verify_email::{
    __path_verify_user_email_handler, verify_user_email_handler, VerifyEmailResponse,
};
