use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Actor, User, UserId};
use crate::auth::application::domain::guard::is_owner;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::cascade::application::domain::errors::CascadeError;
use crate::cascade::application::ports::incoming::use_cases::{
    ReplacePostImageUseCase, ReplaceProfilePhotoUseCase,
};
use crate::multimedia::application::domain::entities::{ImageRef, ImageUpload, UploadedImage};
use crate::multimedia::application::ports::outgoing::{ObjectStore, ObjectStoreError};
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{PostQuery, PostRepository};

// ============================================================================
// Image Replacement Orchestrator
// ============================================================================

/// Upload new, persist the reference, then destroy old.
///
/// A failed persist removes the fresh upload again. A failed destroy of the
/// old object is only logged: the reference already points at the new one.
#[derive(Clone)]
pub struct ImageReplacementOrchestrator {
    posts: Arc<dyn PostQuery + Send + Sync>,
    post_repository: Arc<dyn PostRepository + Send + Sync>,
    users: Arc<dyn UserQuery + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    object_store: Arc<dyn ObjectStore + Send + Sync>,
}

impl ImageReplacementOrchestrator {
    pub fn new(
        posts: Arc<dyn PostQuery + Send + Sync>,
        post_repository: Arc<dyn PostRepository + Send + Sync>,
        users: Arc<dyn UserQuery + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        object_store: Arc<dyn ObjectStore + Send + Sync>,
    ) -> Self {
        Self {
            posts,
            post_repository,
            users,
            user_repository,
            object_store,
        }
    }

    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, CascadeError> {
        let folder = upload.folder().as_str();
        self.object_store.upload(upload).await.map_err(|e| {
            error!(folder, error = %e, "Image upload failed");
            CascadeError::ExternalServiceError(e.to_string())
        })
    }

    async fn discard_new(&self, uploaded: &UploadedImage) {
        if let Err(e) = self.object_store.destroy(&uploaded.public_id).await {
            warn!(
                public_id = %uploaded.public_id,
                error = %e,
                "Could not remove upload after failed save, object is orphaned"
            );
        }
    }

    async fn discard_old(&self, old: &ImageRef, new_public_id: &str) {
        let Some(old_id) = old.public_id() else {
            return;
        };
        if old_id == new_public_id {
            return;
        }

        match self.object_store.destroy(old_id).await {
            Ok(()) | Err(ObjectStoreError::NotFound) => {}
            Err(e) => {
                warn!(public_id = old_id, error = %e, "Old image left behind");
            }
        }
    }
}

#[async_trait]
impl ReplacePostImageUseCase for ImageReplacementOrchestrator {
    async fn execute(
        &self,
        actor: Actor,
        post_id: Uuid,
        upload: ImageUpload,
    ) -> Result<Post, CascadeError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(CascadeError::NotFound)?;

        if !is_owner(post.owner, &actor) {
            warn!(%post_id, actor = %actor.id, "Rejected post image replacement");
            return Err(CascadeError::Forbidden);
        }

        let uploaded = self.upload(upload).await?;

        let updated = match self
            .post_repository
            .update_image(post_id, uploaded.clone().into())
            .await
        {
            Ok(post) => post,
            Err(e) => {
                self.discard_new(&uploaded).await;
                return Err(e.into());
            }
        };

        self.discard_old(&post.image, &uploaded.public_id).await;

        info!(%post_id, public_id = %uploaded.public_id, "Post image replaced");
        Ok(updated)
    }
}

#[async_trait]
impl ReplaceProfilePhotoUseCase for ImageReplacementOrchestrator {
    async fn execute(
        &self,
        actor: Actor,
        user_id: UserId,
        upload: ImageUpload,
    ) -> Result<User, CascadeError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CascadeError::NotFound)?;

        if !is_owner(user.id, &actor) {
            warn!(%user_id, actor = %actor.id, "Rejected profile photo replacement");
            return Err(CascadeError::Forbidden);
        }

        let uploaded = self.upload(upload).await?;

        let updated = match self
            .user_repository
            .update_profile_photo(user_id, uploaded.clone().into())
            .await
        {
            Ok(user) => user,
            Err(e) => {
                self.discard_new(&uploaded).await;
                return Err(e.into());
            }
        };

        self.discard_old(&user.profile_photo, &uploaded.public_id)
            .await;

        info!(%user_id, public_id = %uploaded.public_id, "Profile photo replaced");
        Ok(updated)
    }
}
