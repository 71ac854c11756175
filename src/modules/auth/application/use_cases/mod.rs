pub mod create_user;
pub mod fetch_profile;
pub mod list_users;
pub mod login_user;
pub mod update_profile;
pub mod verify_user_email;
