#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
    pub bucket_name: String,
    pub public_base_url: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "blog-backend-images";
    pub const DEFAULT_PUBLIC_BASE_URL: &'static str = "https://storage.googleapis.com";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp"];

    /// Reads `MULTIMEDIA_UPLOAD_BUCKET` and `MULTIMEDIA_PUBLIC_BASE_URL`, falling back to defaults.
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("MULTIMEDIA_UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        let public_base_url = std::env::var("MULTIMEDIA_PUBLIC_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PUBLIC_BASE_URL.to_string());

        Self {
            bucket_name,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            ..Self::new(Self::DEFAULT_BUCKET_NAME.to_string())
        }
    }

    /// No env reads; used by tests and custom wiring.
    pub fn new(bucket_name: String) -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            bucket_name,
            public_base_url: Self::DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }

    pub fn is_allowed(&self, mime: &str) -> bool {
        self.allowed_mime_types.iter().any(|m| *m == mime)
    }
}
