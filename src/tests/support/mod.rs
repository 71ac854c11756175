pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory;
pub mod object_store;
pub mod stubs;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
