use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::domain::guard::is_admin;
use crate::category::application::domain::entities::{validate_title, Category};
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryError, CreateCategoryUseCase, DeleteCategoryError, DeleteCategoryUseCase,
    GetCategoriesError, GetCategoriesUseCase,
};
use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Categories are small enough that one service covers all three use cases.
pub struct CategoryService<Q, R>
where
    Q: CategoryQuery,
    R: CategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CategoryService<Q, R>
where
    Q: CategoryQuery,
    R: CategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateCategoryUseCase for CategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, title: String) -> Result<Category, CreateCategoryError> {
        if !is_admin(&actor) {
            return Err(CreateCategoryError::Forbidden);
        }

        let title = validate_title(&title).map_err(CreateCategoryError::InvalidTitle)?;

        let category = self
            .repository
            .create_category(CreateCategoryData {
                owner: actor.id,
                title,
            })
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryAlreadyExists => {
                    CreateCategoryError::AlreadyExists
                }
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })?;

        info!(category_id = %category.id, title = %category.title, "Category created");
        Ok(category)
    }
}

#[async_trait]
impl<Q, R> GetCategoriesUseCase for CategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        self.query
            .find_all()
            .await
            .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> DeleteCategoryUseCase for CategoryService<Q, R>
where
    Q: CategoryQuery + Send + Sync,
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, category_id: Uuid) -> Result<(), DeleteCategoryError> {
        if !is_admin(&actor) {
            warn!(%category_id, actor = %actor.id, "Rejected category delete from non-admin");
            return Err(DeleteCategoryError::Forbidden);
        }

        self.repository
            .delete_category(category_id)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => DeleteCategoryError::NotFound,
                other => DeleteCategoryError::RepositoryError(other.to_string()),
            })?;

        info!(%category_id, "Category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{
        sample_category, sample_post, sample_user, InMemoryStore,
    };

    fn service(store: &InMemoryStore) -> CategoryService<InMemoryStore, InMemoryStore> {
        CategoryService::new(store.clone(), store.clone())
    }

    fn admin() -> Actor {
        Actor::new(Uuid::new_v4(), true)
    }

    #[tokio::test]
    async fn admin_creates_category() {
        let store = InMemoryStore::new();

        let category = CreateCategoryUseCase::execute(&service(&store), admin(), " Rust ".into())
            .await
            .unwrap();

        assert_eq!(category.title, "Rust");
        assert_eq!(store.category_count(), 1);
    }

    #[tokio::test]
    async fn non_admin_cannot_create() {
        let store = InMemoryStore::new();

        let err = CreateCategoryUseCase::execute(
            &service(&store),
            Actor::new(Uuid::new_v4(), false),
            "Rust".into(),
        )
        .await
        .unwrap_err();

        assert_eq!(err, CreateCategoryError::Forbidden);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_title_ignoring_case_conflicts() {
        let store = InMemoryStore::new();
        store.insert_category(sample_category("Rust"));

        let err = CreateCategoryUseCase::execute(&service(&store), admin(), "rust".into())
            .await
            .unwrap_err();

        assert_eq!(err, CreateCategoryError::AlreadyExists);
    }

    #[tokio::test]
    async fn lists_categories() {
        let store = InMemoryStore::new();
        store.insert_category(sample_category("b"));
        store.insert_category(sample_category("a"));

        let all = GetCategoriesUseCase::execute(&service(&store)).await.unwrap();

        let titles: Vec<_> = all.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn delete_leaves_posts_in_place() {
        let store = InMemoryStore::new();
        let alice = store.insert_user(sample_user("alice"));
        let category = store.insert_category(sample_category("news"));
        let mut post = sample_post(alice.id);
        post.category_id = category.id;
        let post = store.insert_post(post);

        DeleteCategoryUseCase::execute(&service(&store), admin(), category.id)
            .await
            .unwrap();

        assert_eq!(store.category_count(), 0);
        assert_eq!(store.post(post.id).unwrap().category_id, category.id);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = InMemoryStore::new();

        let err = DeleteCategoryUseCase::execute(&service(&store), admin(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, DeleteCategoryError::NotFound);
    }
}
