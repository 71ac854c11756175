use actix_web::web;
use std::sync::Arc;

use crate::admin::application::service::GetAdminStatsService;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::create_user::CreateUserService;
use crate::auth::application::use_cases::fetch_profile::FetchUserProfileService;
use crate::auth::application::use_cases::list_users::ListUsersService;
use crate::auth::application::use_cases::login_user::{LoginUserService, LoginUserUseCase};
use crate::auth::application::use_cases::update_profile::UpdateUserProfileService;
use crate::auth::application::use_cases::verify_user_email::{
    VerifyUserEmailService, VerifyUserEmailUseCase,
};
use crate::auth::application::user_use_cases::UserUseCases;
use crate::cascade::application::cascade_use_cases::CascadeUseCases;
use crate::cascade::application::orchestrator::{
    CascadeDeleteOrchestrator, ImageReplacementOrchestrator,
};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::service::CategoryService;
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::service::{
    CreateCommentService, DeleteCommentService, GetCommentsService, UpdateCommentService,
};
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::outgoing::ObjectStore;
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::service::{
    CreatePostService, GetPostsService, GetSinglePostService, ToggleLikeService,
    UpdatePostService,
};
use crate::tests::support::auth_helper::test_token_provider;
use crate::tests::support::in_memory::InMemoryStore;
use crate::tests::support::object_store::RecordingObjectStore;
use crate::tests::support::stubs::{PlainPasswordHasher, StubUserEmailNotifier};
use crate::AppState;

/// Builds an `AppState` whose services all run against one
/// [`InMemoryStore`]. Individual use cases can be swapped for mocks.
pub struct TestAppStateBuilder {
    store: InMemoryStore,
    object_store: Arc<dyn ObjectStore + Send + Sync>,
    register_user: Option<Arc<UserRegistrationOrchestrator>>,
    login_user: Option<Arc<dyn LoginUserUseCase + Send + Sync>>,
    verify_user_email: Option<Arc<dyn VerifyUserEmailUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::in_memory(&InMemoryStore::new())
    }
}

impl TestAppStateBuilder {
    pub fn in_memory(store: &InMemoryStore) -> Self {
        Self {
            store: store.clone(),
            object_store: Arc::new(RecordingObjectStore::new()),
            register_user: None,
            login_user: None,
            verify_user_email: None,
        }
    }

    pub fn with_object_store(mut self, store: impl ObjectStore + Send + Sync + 'static) -> Self {
        self.object_store = Arc::new(store);
        self
    }

    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = Some(orchestrator);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_user_email(
        mut self,
        uc: impl VerifyUserEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_user_email = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;
        let hasher = Arc::new(PlainPasswordHasher);

        let register_user_orchestrator = self.register_user.unwrap_or_else(|| {
            Arc::new(UserRegistrationOrchestrator::new(
                Arc::new(CreateUserService::new(
                    store.clone(),
                    store.clone(),
                    hasher.clone(),
                )),
                Arc::new(store.clone()),
                Arc::new(StubUserEmailNotifier),
            ))
        });

        let login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync> = match self.login_user
        {
            Some(uc) => uc,
            None => Arc::new(LoginUserService::new(
                store.clone(),
                hasher.clone(),
                test_token_provider(),
            )),
        };

        let verify_user_email_use_case: Arc<dyn VerifyUserEmailUseCase + Send + Sync> =
            match self.verify_user_email {
                Some(uc) => uc,
                None => Arc::new(VerifyUserEmailService::new(store.clone(), store.clone())),
            };

        let list_users = Arc::new(ListUsersService::new(store.clone()));
        let user = UserUseCases {
            fetch_profile: Arc::new(FetchUserProfileService::new(store.clone(), store.clone())),
            update_profile: Arc::new(UpdateUserProfileService::new(store.clone(), hasher)),
            list: list_users.clone(),
            count: list_users,
        };

        let get_posts = Arc::new(GetPostsService::new(store.clone()));
        let post = PostUseCases {
            create: Arc::new(CreatePostService::new(store.clone(), store.clone())),
            get_list: get_posts.clone(),
            count: get_posts,
            get_single: Arc::new(GetSinglePostService::new(store.clone(), store.clone())),
            update: Arc::new(UpdatePostService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            toggle_like: Arc::new(ToggleLikeService::new(store.clone())),
        };

        let comment = CommentUseCases {
            create: Arc::new(CreateCommentService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            get_list: Arc::new(GetCommentsService::new(store.clone())),
            update: Arc::new(UpdateCommentService::new(store.clone(), store.clone())),
            delete: Arc::new(DeleteCommentService::new(store.clone(), store.clone())),
        };

        let categories = Arc::new(CategoryService::new(store.clone(), store.clone()));
        let category = CategoryUseCases {
            create: categories.clone(),
            get_list: categories.clone(),
            delete: categories,
        };

        let store_arc = Arc::new(store.clone());
        let cascade_delete = Arc::new(CascadeDeleteOrchestrator::new(
            store_arc.clone(),
            store_arc.clone(),
            store_arc.clone(),
            store_arc.clone(),
            store_arc.clone(),
            self.object_store.clone(),
        ));
        let image_replacement = Arc::new(ImageReplacementOrchestrator::new(
            store_arc.clone(),
            store_arc.clone(),
            store_arc.clone(),
            store_arc,
            self.object_store,
        ));
        let cascade = CascadeUseCases {
            delete_post: cascade_delete.clone(),
            delete_user: cascade_delete,
            replace_post_image: image_replacement.clone(),
            replace_profile_photo: image_replacement,
        };

        let admin_stats_use_case = Arc::new(GetAdminStatsService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        ));

        web::Data::new(AppState {
            register_user_orchestrator,
            login_user_use_case,
            verify_user_email_use_case,
            user,
            post,
            comment,
            category,
            cascade,
            admin_stats_use_case,
            upload_policy: UploadPolicy::new("test-bucket".to_string()),
        })
    }
}
