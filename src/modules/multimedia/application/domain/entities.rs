use serde::{Deserialize, Serialize};

use super::policies::UploadPolicy;

pub const DEFAULT_PROFILE_PHOTO_URL: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_960_720.png";
pub const DEFAULT_POST_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2017/06/10/07/18/list-2389219_960_720.png";

/// A stored image as referenced from a user or post.
///
/// `public_id` is `None` only for the built-in defaults, which were never
/// uploaded and therefore have nothing to destroy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub public_id: Option<String>,
}

impl ImageRef {
    pub fn default_profile_photo() -> Self {
        Self {
            url: DEFAULT_PROFILE_PHOTO_URL.to_string(),
            public_id: None,
        }
    }

    pub fn default_post_image() -> Self {
        Self {
            url: DEFAULT_POST_IMAGE_URL.to_string(),
            public_id: None,
        }
    }

    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }
}

impl From<UploadedImage> for ImageRef {
    fn from(img: UploadedImage) -> Self {
        Self {
            url: img.url,
            public_id: Some(img.public_id),
        }
    }
}

/// What the object store hands back after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFolder {
    Posts,
    ProfilePhotos,
}

impl ImageFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFolder::Posts => "posts",
            ImageFolder::ProfilePhotos => "profile-photos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageUploadError {
    #[error("Image payload is empty")]
    Empty,

    #[error("Image exceeds the maximum size of {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),
}

/// Validated image bytes ready for the object store.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    bytes: Vec<u8>,
    content_type: String,
    folder: ImageFolder,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .field("folder", &self.folder)
            .finish()
    }
}

impl ImageUpload {
    pub fn try_new(
        bytes: Vec<u8>,
        content_type: &str,
        policy: &UploadPolicy,
        folder: ImageFolder,
    ) -> Result<Self, ImageUploadError> {
        if bytes.is_empty() {
            return Err(ImageUploadError::Empty);
        }

        if bytes.len() as u64 > policy.max_file_size_bytes {
            return Err(ImageUploadError::TooLarge {
                max_bytes: policy.max_file_size_bytes,
            });
        }

        // "image/png; charset=binary" -> "image/png"
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if !policy.is_allowed(&mime) {
            return Err(ImageUploadError::UnsupportedType(mime));
        }

        Ok(Self {
            bytes,
            content_type: mime,
            folder,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn folder(&self) -> ImageFolder {
        self.folder
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        }
    }
}
