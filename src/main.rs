pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::auth;
pub use modules::cascade;
pub use modules::category;
pub use modules::comment;
pub use modules::email;
pub use modules::multimedia;
pub use modules::post;

use crate::admin::application::ports::incoming::use_cases::GetAdminStatsUseCase;
use crate::admin::application::service::GetAdminStatsService;
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::adapter::outgoing::verification_token_repository_postgres::VerificationTokenRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    create_user::{CreateUserService, CreateUserUseCase},
    fetch_profile::FetchUserProfileService,
    list_users::ListUsersService,
    login_user::{LoginUserService, LoginUserUseCase},
    update_profile::UpdateUserProfileService,
    verify_user_email::{VerifyUserEmailService, VerifyUserEmailUseCase},
};
use crate::auth::application::user_use_cases::UserUseCases;
use crate::cascade::application::cascade_use_cases::CascadeUseCases;
use crate::cascade::application::orchestrator::{
    CascadeDeleteOrchestrator, ImageReplacementOrchestrator,
};
use crate::category::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::service::CategoryService;
use crate::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::service::{
    CreateCommentService, DeleteCommentService, GetCommentsService, UpdateCommentService,
};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::multimedia::adapter::outgoing::object_store_gcs::GcsObjectStore;
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::outgoing::ObjectStore;
use crate::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::service::{
    CreatePostService, GetPostsService, GetSinglePostService, ToggleLikeService,
    UpdatePostService,
};
use crate::shared::api::json_config::{
    custom_json_config, custom_path_config, custom_query_config,
};

use actix_web::{web, App, HttpServer};
use anyhow::{anyhow, Context};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub verify_user_email_use_case: Arc<dyn VerifyUserEmailUseCase + Send + Sync>,
    pub user: UserUseCases,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
    pub category: CategoryUseCases,
    pub cascade: CascadeUseCases,
    pub admin_stats_use_case: Arc<dyn GetAdminStatsUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));

    let smtp_sender = smtp_sender_from_env(&rust_env)
        .map_err(|e| std::io::Error::other(format!("{e:#}")))?;

    let server_url = format!("{host}:{port}");
    info!(%server_url, env = %rust_env, "Server configured");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let token_repo = VerificationTokenRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));

    let upload_policy = UploadPolicy::from_env();
    let object_store: Arc<dyn ObjectStore + Send + Sync> =
        Arc::new(GcsObjectStore::new(&upload_policy));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    // Registration
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let email_notifier: Arc<dyn UserEmailNotifier + Send + Sync> =
        Arc::new(UserEmailService::new(email_sender, app_url));
    let create_user_uc: Arc<dyn CreateUserUseCase + Send + Sync> = Arc::new(
        CreateUserService::new(user_query.clone(), user_repo.clone(), password_hasher.clone()),
    );
    let mut register_user_orchestrator = UserRegistrationOrchestrator::new(
        create_user_uc,
        Arc::new(token_repo.clone()),
        email_notifier,
    );
    if let Some(hours) = env::var("VERIFICATION_TOKEN_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
    {
        register_user_orchestrator = register_user_orchestrator.with_token_ttl_hours(hours);
    }

    // Users
    let list_users = Arc::new(ListUsersService::new(user_query.clone()));
    let user = UserUseCases {
        fetch_profile: Arc::new(FetchUserProfileService::new(
            user_query.clone(),
            post_query.clone(),
        )),
        update_profile: Arc::new(UpdateUserProfileService::new(
            user_repo.clone(),
            password_hasher.clone(),
        )),
        list: list_users.clone(),
        count: list_users,
    };

    // Posts
    let get_posts = Arc::new(GetPostsService::new(post_query.clone()));
    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(
            post_repo.clone(),
            category_query.clone(),
        )),
        get_list: get_posts.clone(),
        count: get_posts,
        get_single: Arc::new(GetSinglePostService::new(
            post_query.clone(),
            comment_query.clone(),
        )),
        update: Arc::new(UpdatePostService::new(
            post_query.clone(),
            post_repo.clone(),
            category_query.clone(),
        )),
        toggle_like: Arc::new(ToggleLikeService::new(post_repo.clone())),
    };

    // Comments
    let comment = CommentUseCases {
        create: Arc::new(CreateCommentService::new(
            comment_repo.clone(),
            post_query.clone(),
            user_query.clone(),
        )),
        get_list: Arc::new(GetCommentsService::new(comment_query.clone())),
        update: Arc::new(UpdateCommentService::new(
            comment_query.clone(),
            comment_repo.clone(),
        )),
        delete: Arc::new(DeleteCommentService::new(
            comment_query.clone(),
            comment_repo.clone(),
        )),
    };

    // Categories
    let categories = Arc::new(CategoryService::new(category_query.clone(), category_repo));
    let category = CategoryUseCases {
        create: categories.clone(),
        get_list: categories.clone(),
        delete: categories,
    };

    // Cascades
    let cascade_delete = Arc::new(CascadeDeleteOrchestrator::new(
        Arc::new(user_query.clone()),
        Arc::new(user_repo.clone()),
        Arc::new(post_query.clone()),
        Arc::new(post_repo.clone()),
        Arc::new(comment_repo),
        object_store.clone(),
    ));
    let image_replacement = Arc::new(ImageReplacementOrchestrator::new(
        Arc::new(post_query.clone()),
        Arc::new(post_repo),
        Arc::new(user_query.clone()),
        Arc::new(user_repo.clone()),
        object_store,
    ));
    let cascade = CascadeUseCases {
        delete_post: cascade_delete.clone(),
        delete_user: cascade_delete,
        replace_post_image: image_replacement.clone(),
        replace_profile_photo: image_replacement,
    };

    let login_user_use_case = LoginUserService::new(
        user_query.clone(),
        password_hasher,
        Arc::clone(&token_provider_arc),
    );
    let verify_user_email_use_case = VerifyUserEmailService::new(user_repo, token_repo);
    let admin_stats_use_case =
        GetAdminStatsService::new(user_query, post_query, comment_query, category_query);

    // Raw image bodies: upload limit plus slack for the handler's own size check.
    let payload_limit = (upload_policy.max_file_size_bytes as usize) + 1024;

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        login_user_use_case: Arc::new(login_user_use_case),
        verify_user_email_use_case: Arc::new(verify_user_email_use_case),
        user,
        post,
        comment,
        category,
        cascade,
        admin_stats_use_case: Arc::new(admin_stats_use_case),
        upload_policy,
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::PayloadConfig::new(payload_limit))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Mailpit on `RUST_ENV=test`, authenticated relay otherwise.
#[cfg(not(tarpaulin_include))]
fn smtp_sender_from_env(rust_env: &str) -> anyhow::Result<SmtpEmailSender> {
    let from_email = env::var("EMAIL_FROM").context("EMAIL_FROM not set")?;

    if rust_env == "test" {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .context("Invalid SMTP_PORT")?;

        return Ok(SmtpEmailSender::new_local(&host, port, &from_email));
    }

    let smtp_server = env::var("SMTP_SERVER").context("SMTP_SERVER not set")?;
    let smtp_user = env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?;
    let smtp_pass = env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?;

    SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
        .map_err(|e| anyhow!("Invalid SMTP relay configuration: {e}"))
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::admin::adapter::incoming::web::routes as admin_routes;
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::cascade::adapter::incoming::web::routes as cascade_routes;
    use crate::category::adapter::incoming::web::routes as category_routes;
    use crate::comment::adapter::incoming::web::routes as comment_routes;
    use crate::post::adapter::incoming::web::routes as post_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::verify_user_email_handler);
    cfg.service(auth_routes::login_user_handler);
    // Users (literal segments before `{user_id}`)
    cfg.service(auth_routes::count_users_handler);
    cfg.service(cascade_routes::upload_profile_photo_handler);
    cfg.service(auth_routes::list_users_handler);
    cfg.service(auth_routes::get_user_profile_handler);
    cfg.service(auth_routes::update_user_profile_handler);
    cfg.service(cascade_routes::delete_user_handler);
    // Posts (`/count` before `{post_id}`)
    cfg.service(post_routes::count_posts_handler);
    cfg.service(post_routes::get_posts_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(cascade_routes::update_post_image_handler);
    cfg.service(post_routes::toggle_like_handler);
    cfg.service(post_routes::get_single_post_handler);
    cfg.service(post_routes::update_post_handler);
    cfg.service(cascade_routes::delete_post_handler);
    // Comments
    cfg.service(comment_routes::create_comment_handler);
    cfg.service(comment_routes::get_comments_handler);
    cfg.service(comment_routes::update_comment_handler);
    cfg.service(comment_routes::delete_comment_handler);
    // Categories
    cfg.service(category_routes::create_category_handler);
    cfg.service(category_routes::get_categories_handler);
    cfg.service(category_routes::delete_category_handler);
    // Admin
    cfg.service(admin_routes::get_admin_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
