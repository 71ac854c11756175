pub mod json_config;
mod response;

pub use response::{ApiError, ApiResponse};
