//! One shared in-memory backend implementing every persistence port, so
//! use cases and orchestrators can be tested against real state.
//!
//! Inherent helpers (`insert_*`, `user`, `post`, ...) never count as writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError, VerificationTokenRecord, VerificationTokenRepository,
    VerificationTokenRepositoryError,
};
use crate::category::application::domain::entities::Category;
use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryRepository, CategoryRepositoryError,
    CreateCategoryData,
};
use crate::comment::application::domain::entities::{Comment, CommentFilter};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError,
    CreateCommentData,
};
use crate::multimedia::application::domain::entities::ImageRef;
use crate::post::application::domain::entities::{Post, PostFilter};
use crate::post::application::ports::outgoing::{
    CreatePostData, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
    UpdatePostData,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Default)]
struct State {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    categories: Vec<Category>,
    tokens: Vec<VerificationTokenRecord>,
    fail_reads: bool,
    failing_writes: HashSet<&'static str>,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn read(&self) -> Result<MutexGuard<'_, State>, String> {
        let state = self.lock();
        if state.fail_reads {
            return Err("read failed".to_string());
        }
        Ok(state)
    }

    fn write(&self, op: &'static str) -> Result<MutexGuard<'_, State>, String> {
        let mut state = self.lock();
        state.writes += 1;
        if state.failing_writes.contains(op) {
            return Err(format!("{op} failed"));
        }
        Ok(state)
    }

    // ------------------------------------------------------------------------
    // Failure injection
    // ------------------------------------------------------------------------

    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// `op` is the repository method name, e.g. `"delete_post"`. Bulk
    /// deletes are `"delete_posts"` and `"delete_comments"`.
    pub fn fail_write(&self, op: &'static str) {
        self.lock().failing_writes.insert(op);
    }

    /// Repository writes attempted so far, failed ones included.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    // ------------------------------------------------------------------------
    // Seeding and inspection
    // ------------------------------------------------------------------------

    pub fn insert_user(&self, user: User) -> User {
        self.lock().users.push(user.clone());
        user
    }

    pub fn insert_post(&self, post: Post) -> Post {
        self.lock().posts.push(post.clone());
        post
    }

    pub fn insert_comment(&self, comment: Comment) -> Comment {
        self.lock().comments.push(comment.clone());
        comment
    }

    pub fn insert_category(&self, category: Category) -> Category {
        self.lock().categories.push(category.clone());
        category
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.lock().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn post(&self, id: Uuid) -> Option<Post> {
        self.lock().posts.iter().find(|p| p.id == id).cloned()
    }

    pub fn comment(&self, id: Uuid) -> Option<Comment> {
        self.lock().comments.iter().find(|c| c.id == id).cloned()
    }

    pub fn posts_by(&self, owner: UserId) -> Vec<Post> {
        self.lock()
            .posts
            .iter()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect()
    }

    pub fn comments_on(&self, post_id: Uuid) -> Vec<Comment> {
        self.lock()
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    pub fn comments_by(&self, owner: UserId) -> Vec<Comment> {
        self.lock()
            .comments
            .iter()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    pub fn category_count(&self) -> usize {
        self.lock().categories.len()
    }

    pub fn verification_token_count(&self) -> usize {
        self.lock().tokens.len()
    }
}

/// Newest first; ties keep the most recently inserted in front.
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    out
}

fn oldest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by_key(|item| created_at(item));
    out
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> PageResult<T> {
    let total = items.len() as u64;
    PageResult {
        items: items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect(),
        page: page.page,
        per_page: page.per_page,
        total,
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let state = self.read().map_err(UserQueryError::DatabaseError)?;
        Ok(state.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let state = self.read().map_err(UserQueryError::DatabaseError)?;
        Ok(state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let state = self.read().map_err(UserQueryError::DatabaseError)?;
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<User>, UserQueryError> {
        let state = self.read().map_err(UserQueryError::DatabaseError)?;
        Ok(paginate(newest_first(&state.users, |u| u.created_at), page))
    }

    async fn count(&self) -> Result<u64, UserQueryError> {
        let state = self.read().map_err(UserQueryError::DatabaseError)?;
        Ok(state.users.len() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut state = self
            .write("create_user")
            .map_err(UserRepositoryError::DatabaseError)?;

        let taken = state.users.iter().any(|u| {
            u.username == data.username || u.email.eq_ignore_ascii_case(&data.email)
        });
        if taken {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            bio: None,
            profile_photo: data.profile_photo,
            is_admin: false,
            is_verified: false,
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let mut state = self
            .write("update_user")
            .map_err(UserRepositoryError::DatabaseError)?;

        if let Some(username) = &data.username {
            if state
                .users
                .iter()
                .any(|u| u.id != user_id && &u.username == username)
            {
                return Err(UserRepositoryError::UserAlreadyExists);
            }
        }

        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        if let Some(username) = data.username {
            user.username = username;
        }
        if let Some(bio) = data.bio {
            user.bio = Some(bio);
        }
        if let Some(hash) = data.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_profile_photo(
        &self,
        user_id: UserId,
        photo: ImageRef,
    ) -> Result<User, UserRepositoryError> {
        let mut state = self
            .write("update_profile_photo")
            .map_err(UserRepositoryError::DatabaseError)?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.profile_photo = photo;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn activate_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut state = self
            .write("activate_user")
            .map_err(UserRepositoryError::DatabaseError)?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.is_verified = true;
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut state = self
            .write("delete_user")
            .map_err(UserRepositoryError::DatabaseError)?;
        let before = state.users.len();
        state.users.retain(|u| u.id != user_id);
        if state.users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        state.tokens.retain(|t| t.user_id != user_id);
        Ok(())
    }
}

#[async_trait]
impl VerificationTokenRepository for InMemoryStore {
    async fn create(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationTokenRecord, VerificationTokenRepositoryError> {
        let mut state = self
            .write("create_verification_token")
            .map_err(VerificationTokenRepositoryError::DatabaseError)?;
        let record = VerificationTokenRecord {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            expires_at,
        };
        state.tokens.push(record.clone());
        Ok(record)
    }

    async fn find(
        &self,
        user_id: UserId,
        token_hash: &str,
    ) -> Result<Option<VerificationTokenRecord>, VerificationTokenRepositoryError> {
        let state = self
            .read()
            .map_err(VerificationTokenRepositoryError::DatabaseError)?;
        Ok(state
            .tokens
            .iter()
            .find(|t| t.user_id == user_id && t.token_hash == token_hash)
            .cloned())
    }

    async fn delete(&self, token_id: Uuid) -> Result<(), VerificationTokenRepositoryError> {
        let mut state = self
            .write("delete_verification_token")
            .map_err(VerificationTokenRepositoryError::DatabaseError)?;
        state.tokens.retain(|t| t.id != token_id);
        Ok(())
    }
}

// ============================================================================
// Posts
// ============================================================================

#[async_trait]
impl PostQuery for InMemoryStore {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let state = self.read().map_err(PostQueryError::DatabaseError)?;
        Ok(state.posts.iter().find(|p| p.id == post_id).cloned())
    }

    async fn list(
        &self,
        filter: PostFilter,
        page: PageRequest,
    ) -> Result<PageResult<Post>, PostQueryError> {
        let state = self.read().map_err(PostQueryError::DatabaseError)?;
        let matching: Vec<Post> = newest_first(&state.posts, |p| p.created_at)
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        Ok(paginate(matching, page))
    }

    async fn find_all(&self, filter: PostFilter) -> Result<Vec<Post>, PostQueryError> {
        let state = self.read().map_err(PostQueryError::DatabaseError)?;
        Ok(newest_first(&state.posts, |p| p.created_at)
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    async fn count(&self, filter: PostFilter) -> Result<u64, PostQueryError> {
        let state = self.read().map_err(PostQueryError::DatabaseError)?;
        Ok(state.posts.iter().filter(|p| filter.matches(p)).count() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        let mut state = self
            .write("create_post")
            .map_err(PostRepositoryError::DatabaseError)?;
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            owner: data.owner,
            title: data.title,
            description: data.description,
            category_id: data.category_id,
            image: data.image,
            likes: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<Post, PostRepositoryError> {
        let mut state = self
            .write("update_post")
            .map_err(PostRepositoryError::DatabaseError)?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::PostNotFound)?;
        if let Some(title) = data.title {
            post.title = title;
        }
        if let Some(description) = data.description {
            post.description = description;
        }
        if let Some(category_id) = data.category_id {
            post.category_id = category_id;
        }
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn update_image(
        &self,
        post_id: Uuid,
        image: ImageRef,
    ) -> Result<Post, PostRepositoryError> {
        let mut state = self
            .write("update_image")
            .map_err(PostRepositoryError::DatabaseError)?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::PostNotFound)?;
        post.image = image;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn toggle_like(&self, post_id: Uuid, user: UserId) -> Result<Post, PostRepositoryError> {
        let mut state = self
            .write("toggle_like")
            .map_err(PostRepositoryError::DatabaseError)?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::PostNotFound)?;
        if post.is_liked_by(user) {
            post.likes.retain(|u| *u != user);
        } else {
            post.likes.push(user);
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let mut state = self
            .write("delete_post")
            .map_err(PostRepositoryError::DatabaseError)?;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != post_id);
        if state.posts.len() == before {
            return Err(PostRepositoryError::PostNotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, post_ids: &[Uuid]) -> Result<u64, PostRepositoryError> {
        let mut state = self
            .write("delete_posts")
            .map_err(PostRepositoryError::DatabaseError)?;
        let before = state.posts.len();
        state.posts.retain(|p| !post_ids.contains(&p.id));
        Ok((before - state.posts.len()) as u64)
    }
}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentQuery for InMemoryStore {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError> {
        let state = self.read().map_err(CommentQueryError::DatabaseError)?;
        Ok(state.comments.iter().find(|c| c.id == comment_id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<Comment>, CommentQueryError> {
        let state = self.read().map_err(CommentQueryError::DatabaseError)?;
        Ok(paginate(newest_first(&state.comments, |c| c.created_at), page))
    }

    async fn find_all(&self, filter: CommentFilter) -> Result<Vec<Comment>, CommentQueryError> {
        let state = self.read().map_err(CommentQueryError::DatabaseError)?;
        Ok(oldest_first(&state.comments, |c| c.created_at)
            .into_iter()
            .filter(|c| filter.matches(c))
            .collect())
    }

    async fn count(&self) -> Result<u64, CommentQueryError> {
        let state = self.read().map_err(CommentQueryError::DatabaseError)?;
        Ok(state.comments.len() as u64)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, CommentRepositoryError> {
        let mut state = self
            .write("create_comment")
            .map_err(CommentRepositoryError::DatabaseError)?;
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: data.post_id,
            owner: data.owner,
            username: data.username,
            text: data.text,
            created_at: now,
            updated_at: now,
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_text(
        &self,
        comment_id: Uuid,
        text: String,
    ) -> Result<Comment, CommentRepositoryError> {
        let mut state = self
            .write("update_text")
            .map_err(CommentRepositoryError::DatabaseError)?;
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(CommentRepositoryError::CommentNotFound)?;
        comment.text = text;
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let mut state = self
            .write("delete_comment")
            .map_err(CommentRepositoryError::DatabaseError)?;
        let before = state.comments.len();
        state.comments.retain(|c| c.id != comment_id);
        if state.comments.len() == before {
            return Err(CommentRepositoryError::CommentNotFound);
        }
        Ok(())
    }

    async fn delete_many(&self, filter: &CommentFilter) -> Result<u64, CommentRepositoryError> {
        let mut state = self
            .write("delete_comments")
            .map_err(CommentRepositoryError::DatabaseError)?;
        let before = state.comments.len();
        state.comments.retain(|c| !filter.matches(c));
        Ok((before - state.comments.len()) as u64)
    }
}

// ============================================================================
// Categories
// ============================================================================

#[async_trait]
impl CategoryQuery for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let state = self.read().map_err(CategoryQueryError::DatabaseError)?;
        let mut categories = state.categories.clone();
        categories.sort_by_key(|c| c.title.to_lowercase());
        Ok(categories)
    }

    async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CategoryQueryError> {
        let state = self.read().map_err(CategoryQueryError::DatabaseError)?;
        Ok(state.categories.iter().find(|c| c.id == category_id).cloned())
    }

    async fn count(&self) -> Result<u64, CategoryQueryError> {
        let state = self.read().map_err(CategoryQueryError::DatabaseError)?;
        Ok(state.categories.len() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let mut state = self
            .write("create_category")
            .map_err(CategoryRepositoryError::DatabaseError)?;
        if state
            .categories
            .iter()
            .any(|c| c.title.to_lowercase() == data.title.to_lowercase())
        {
            return Err(CategoryRepositoryError::CategoryAlreadyExists);
        }
        let category = Category {
            id: Uuid::new_v4(),
            owner: data.owner,
            title: data.title,
            created_at: Utc::now(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let mut state = self
            .write("delete_category")
            .map_err(CategoryRepositoryError::DatabaseError)?;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != category_id);
        if state.categories.len() == before {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Verified, non-admin, default profile photo, `{username}@example.com`.
pub fn sample_user(username: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "hashed:password123".to_string(),
        bio: None,
        profile_photo: ImageRef::default_profile_photo(),
        is_admin: false,
        is_verified: true,
        created_at: now,
        updated_at: now,
    }
}

/// Default image and a category id of its own.
pub fn sample_post(owner: UserId) -> Post {
    let now = Utc::now();
    Post {
        id: Uuid::new_v4(),
        owner,
        title: "Ownership in practice".to_string(),
        description: "Notes on borrowing, lifetimes and moves.".to_string(),
        category_id: Uuid::new_v4(),
        image: ImageRef::default_post_image(),
        likes: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_comment(post_id: Uuid, owner: UserId) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4(),
        post_id,
        owner,
        username: "commenter".to_string(),
        text: "Nice write-up".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_category(title: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        owner: UserId::from(Uuid::new_v4()),
        title: title.to_string(),
        created_at: Utc::now(),
    }
}

/// An image that lives in the object store.
pub fn stored_image(public_id: &str) -> ImageRef {
    ImageRef {
        url: format!("https://storage.googleapis.com/test-bucket/{public_id}"),
        public_id: Some(public_id.to_string()),
    }
}
