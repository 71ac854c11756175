pub mod errors;
pub mod plan;
pub mod summary;
