use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::ports::outgoing::{ObjectStore, ObjectStoreError};

#[derive(Default)]
struct Calls {
    uploads: Vec<String>,
    destroyed: Vec<String>,
    bulk_destroyed: Vec<Vec<String>>,
    upload_error: Option<ObjectStoreError>,
    destroy_error: Option<ObjectStoreError>,
    bulk_error: Option<ObjectStoreError>,
    next_id: usize,
}

/// Object store fake that records every call and can be told to fail.
/// Failed calls are recorded too.
#[derive(Clone, Default)]
pub struct RecordingObjectStore {
    calls: Arc<Mutex<Calls>>,
}

impl RecordingObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Calls> {
        self.calls.lock().unwrap()
    }

    pub fn fail_uploads_with(&self, err: ObjectStoreError) {
        self.lock().upload_error = Some(err);
    }

    pub fn fail_destroys_with(&self, err: ObjectStoreError) {
        self.lock().destroy_error = Some(err);
    }

    pub fn fail_bulk_destroys_with(&self, err: ObjectStoreError) {
        self.lock().bulk_error = Some(err);
    }

    /// Public ids handed out by successful uploads.
    pub fn uploads(&self) -> Vec<String> {
        self.lock().uploads.clone()
    }

    pub fn destroyed(&self) -> Vec<String> {
        self.lock().destroyed.clone()
    }

    pub fn bulk_destroyed(&self) -> Vec<Vec<String>> {
        self.lock().bulk_destroyed.clone()
    }

    pub fn call_count(&self) -> usize {
        let calls = self.lock();
        calls.next_id + calls.destroyed.len() + calls.bulk_destroyed.len()
    }
}

#[async_trait]
impl ObjectStore for RecordingObjectStore {
    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, ObjectStoreError> {
        let mut calls = self.lock();
        calls.next_id += 1;
        if let Some(err) = calls.upload_error.clone() {
            return Err(err);
        }

        let public_id = format!(
            "{}/upload-{}.{}",
            upload.folder().as_str(),
            calls.next_id,
            upload.extension()
        );
        calls.uploads.push(public_id.clone());

        Ok(UploadedImage {
            url: format!("https://storage.googleapis.com/test-bucket/{public_id}"),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ObjectStoreError> {
        let mut calls = self.lock();
        calls.destroyed.push(public_id.to_string());
        match calls.destroy_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn bulk_destroy(&self, public_ids: &[String]) -> Result<(), ObjectStoreError> {
        let mut calls = self.lock();
        calls.bulk_destroyed.push(public_ids.to_vec());
        match calls.bulk_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
