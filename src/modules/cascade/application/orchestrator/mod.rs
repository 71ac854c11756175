pub mod cascade_delete;
pub mod image_replacement;

pub use cascade_delete::CascadeDeleteOrchestrator;
pub use image_replacement::ImageReplacementOrchestrator;
