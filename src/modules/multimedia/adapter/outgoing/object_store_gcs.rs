use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::outgoing::{ObjectStore, ObjectStoreError};

/// Failure from a GCS call. `status` is the HTTP status when the service
/// answered; transport and auth failures have none.
#[derive(Debug, Clone, PartialEq)]
struct GcsCallError {
    status: Option<u16>,
    message: String,
}

impl GcsCallError {
    fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    #[cfg(test)]
    fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl From<google_cloud_storage::http::Error> for GcsCallError {
    fn from(err: google_cloud_storage::http::Error) -> Self {
        match err {
            google_cloud_storage::http::Error::Response(resp) => Self {
                status: Some(resp.code),
                message: resp.message,
            },
            other => Self::transport(other.to_string()),
        }
    }
}

/// Only the status code decides `NotFound`; message text never does.
fn map_gcs_error(err: GcsCallError) -> ObjectStoreError {
    match err.status {
        Some(404) => ObjectStoreError::NotFound,
        Some(code) if (400..500).contains(&code) => {
            ObjectStoreError::Rejected(format!("{code}: {}", err.message))
        }
        Some(code) => ObjectStoreError::Unavailable(format!("{code}: {}", err.message)),
        None => ObjectStoreError::Unavailable(err.message),
    }
}

/// Seam over google-cloud-storage so the adapter can be tested with a fake.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), GcsCallError>;

    async fn delete_object(&self, bucket: &str, object_name: &str) -> Result<(), GcsCallError>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), GcsCallError> {
        self.0
            .upload_object(bucket, object_name, content_type, data)
            .await
    }

    async fn delete_object(&self, bucket: &str, object_name: &str) -> Result<(), GcsCallError> {
        self.0.delete_object(bucket, object_name).await
    }
}

/// Production object store backed by a Google Cloud Storage bucket.
///
/// `public_id` is the object name inside the bucket (`posts/<uuid>.png`).
#[derive(Clone)]
pub struct GcsObjectStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    public_base_url: String,
}

impl GcsObjectStore {
    /// Client is initialized lazily on first use.
    pub fn new(policy: &UploadPolicy) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: policy.bucket_name.clone(),
            public_base_url: policy.public_base_url.clone(),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, ObjectStoreError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok::<_, String>(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to initialize GCS client");
                ObjectStoreError::Unavailable(e)
            })
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, policy: &UploadPolicy) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: policy.bucket_name.clone(),
            public_base_url: policy.public_base_url.clone(),
        }
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, object_name)
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, ObjectStoreError> {
        let client = self.get_client().await?;

        let object_name = format!(
            "{}/{}.{}",
            upload.folder().as_str(),
            Uuid::new_v4(),
            upload.extension()
        );
        let content_type = upload.content_type().to_string();

        client
            .upload_object(&self.bucket, &object_name, &content_type, upload.into_bytes())
            .await
            .map_err(map_gcs_error)?;

        tracing::debug!(object = %object_name, "Image uploaded");

        Ok(UploadedImage {
            url: self.public_url(&object_name),
            public_id: object_name,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ObjectStoreError> {
        let client = self.get_client().await?;

        client
            .delete_object(&self.bucket, public_id)
            .await
            .map_err(map_gcs_error)
    }

    async fn bulk_destroy(&self, public_ids: &[String]) -> Result<(), ObjectStoreError> {
        if public_ids.is_empty() {
            return Ok(());
        }

        let client = self.get_client().await?;

        // GCS JSON API has no multi-object delete; objects already gone are skipped.
        for public_id in public_ids {
            match client.delete_object(&self.bucket, public_id).await {
                Ok(()) => {}
                Err(e) => match map_gcs_error(e) {
                    ObjectStoreError::NotFound => {
                        tracing::debug!(object = %public_id, "Object already absent");
                    }
                    other => return Err(other),
                },
            }
        }

        Ok(())
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    client: google_cloud_storage::client::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| e.to_string())?;

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), GcsCallError> {
        use google_cloud_storage::http::objects::upload::{
            Media, UploadObjectRequest, UploadType,
        };

        let upload_type = UploadType::Simple(Media {
            name: object_name.to_string().into(),
            content_type: content_type.to_string().into(),
            content_length: Some(data.len() as u64),
        });

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                data,
                &upload_type,
            )
            .await
            .map(|_| ())
            .map_err(GcsCallError::from)
    }

    async fn delete_object(&self, bucket: &str, object_name: &str) -> Result<(), GcsCallError> {
        use google_cloud_storage::http::objects::delete::DeleteObjectRequest;

        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: bucket.to_string(),
                object: object_name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(GcsCallError::from)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multimedia::application::domain::entities::ImageFolder;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGcsClient {
        uploads: Mutex<Vec<(String, String, String, usize)>>,
        deletes: Mutex<Vec<(String, String)>>,
        missing: HashSet<String>,
        fail_with: Option<GcsCallError>,
    }

    impl FakeGcsClient {
        fn failing(err: GcsCallError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }

        fn with_missing(ids: &[&str]) -> Self {
            Self {
                missing: ids.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn upload_object(
            &self,
            bucket: &str,
            object_name: &str,
            content_type: &str,
            data: Vec<u8>,
        ) -> Result<(), GcsCallError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.uploads.lock().unwrap().push((
                bucket.to_string(),
                object_name.to_string(),
                content_type.to_string(),
                data.len(),
            ));
            Ok(())
        }

        async fn delete_object(&self, bucket: &str, object_name: &str) -> Result<(), GcsCallError> {
            self.deletes
                .lock()
                .unwrap()
                .push((bucket.to_string(), object_name.to_string()));

            if self.missing.contains(object_name) {
                return Err(GcsCallError::status(404, "No such object"));
            }
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(())
        }
    }

    fn policy() -> UploadPolicy {
        let mut p = UploadPolicy::new("test-bucket".to_string());
        p.public_base_url = "https://cdn.example.com".to_string();
        p
    }

    fn png_upload(folder: ImageFolder) -> ImageUpload {
        ImageUpload::try_new(vec![1, 2, 3, 4], "image/png", &policy(), folder).unwrap()
    }

    #[test]
    fn map_gcs_error_classifies_by_status() {
        assert_eq!(
            map_gcs_error(GcsCallError::status(404, "No such object")),
            ObjectStoreError::NotFound
        );
        assert!(matches!(
            map_gcs_error(GcsCallError::status(403, "Forbidden")),
            ObjectStoreError::Rejected(_)
        ));
        assert!(matches!(
            map_gcs_error(GcsCallError::status(503, "Backend error")),
            ObjectStoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_gcs_error(GcsCallError::transport("connection reset by peer")),
            ObjectStoreError::Unavailable(_)
        ));
    }

    #[test]
    fn not_found_text_without_404_status_is_not_not_found() {
        let err = GcsCallError::status(
            403,
            "caller does not have storage.objects.delete access to b/posts/3f2a404c-not found.png",
        );
        assert!(matches!(map_gcs_error(err), ObjectStoreError::Rejected(_)));

        let err = GcsCallError::transport("http error: 404 while resolving proxy");
        assert!(matches!(map_gcs_error(err), ObjectStoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn upload_names_object_by_folder_and_builds_public_url() {
        let fake = Arc::new(FakeGcsClient::default());
        let store = GcsObjectStore::with_client(fake.clone(), &policy());

        let uploaded = store.upload(png_upload(ImageFolder::Posts)).await.unwrap();

        assert!(uploaded.public_id.starts_with("posts/"));
        assert!(uploaded.public_id.ends_with(".png"));
        assert_eq!(
            uploaded.url,
            format!("https://cdn.example.com/test-bucket/{}", uploaded.public_id)
        );

        let uploads = fake.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].0, "test-bucket");
        assert_eq!(uploads[0].1, uploaded.public_id);
        assert_eq!(uploads[0].2, "image/png");
        assert_eq!(uploads[0].3, 4);
    }

    #[tokio::test]
    async fn upload_failure_is_mapped() {
        let fake = Arc::new(FakeGcsClient::failing(GcsCallError::transport("timeout while connecting")));
        let store = GcsObjectStore::with_client(fake, &policy());

        let err = store
            .upload(png_upload(ImageFolder::ProfilePhotos))
            .await
            .unwrap_err();

        assert!(matches!(err, ObjectStoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn destroy_reports_missing_object_as_not_found() {
        let fake = Arc::new(FakeGcsClient::with_missing(&["posts/gone.png"]));
        let store = GcsObjectStore::with_client(fake, &policy());

        let err = store.destroy("posts/gone.png").await.unwrap_err();
        assert_eq!(err, ObjectStoreError::NotFound);
    }

    #[tokio::test]
    async fn bulk_destroy_skips_missing_objects() {
        let fake = Arc::new(FakeGcsClient::with_missing(&["posts/b.png"]));
        let store = GcsObjectStore::with_client(fake.clone(), &policy());

        let ids = vec![
            "posts/a.png".to_string(),
            "posts/b.png".to_string(),
            "profile-photos/c.png".to_string(),
        ];
        store.bulk_destroy(&ids).await.unwrap();

        let deletes = fake.deletes.lock().unwrap();
        let names: Vec<&str> = deletes.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["posts/a.png", "posts/b.png", "profile-photos/c.png"]);
    }

    #[tokio::test]
    async fn bulk_destroy_stops_on_provider_failure() {
        let fake = Arc::new(FakeGcsClient::failing(GcsCallError::status(503, "service unavailable")));
        let store = GcsObjectStore::with_client(fake.clone(), &policy());

        let ids = vec!["posts/a.png".to_string(), "posts/b.png".to_string()];
        let err = store.bulk_destroy(&ids).await.unwrap_err();

        assert!(matches!(err, ObjectStoreError::Unavailable(_)));
        assert_eq!(fake.deletes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn forbidden_delete_naming_a_404_object_is_a_failure() {
        let denied = GcsCallError::status(
            403,
            "caller does not have storage.objects.delete access to test-bucket/posts/3f2a404c.png",
        );
        let fake = Arc::new(FakeGcsClient::failing(denied));
        let store = GcsObjectStore::with_client(fake.clone(), &policy());

        let err = store.destroy("posts/3f2a404c.png").await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::Rejected(_)));

        let ids = vec!["posts/3f2a404c.png".to_string(), "posts/b.png".to_string()];
        let err = store.bulk_destroy(&ids).await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::Rejected(_)));
        assert_eq!(fake.deletes.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn bulk_destroy_with_no_ids_makes_no_calls() {
        let fake = Arc::new(FakeGcsClient::default());
        let store = GcsObjectStore::with_client(fake.clone(), &policy());

        store.bulk_destroy(&[]).await.unwrap();
        assert!(fake.deletes.lock().unwrap().is_empty());
    }
}
