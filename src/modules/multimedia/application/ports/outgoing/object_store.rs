use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};

/// Errors raised by the remote object store.
///
/// Provider details travel in the payload for logging only; handlers never
/// return them to clients.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("Object not found")]
    NotFound,

    #[error("Object store rejected the request: {0}")]
    Rejected(String),

    #[error("Object store unavailable: {0}")]
    Unavailable(String),
}

/// Port for the remote store holding image bytes.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores the image and returns where it is served from.
    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, ObjectStoreError>;

    /// Removes one object. `NotFound` means it was already gone.
    async fn destroy(&self, public_id: &str) -> Result<(), ObjectStoreError>;

    /// Removes several objects in one call. Missing objects are skipped.
    async fn bulk_destroy(&self, public_ids: &[String]) -> Result<(), ObjectStoreError>;
}
