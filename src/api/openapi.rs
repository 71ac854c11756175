use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::admin::application::ports::incoming::use_cases::AdminStats;
use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RegisterUserResponse,
    RegisteredUser, UpdateUserRequest, UserCountResponse, UserProfileResponse,
    VerifyEmailResponse,
};
use crate::category::adapter::incoming::web::routes::{
    CreateCategoryRequest, DeleteCategoryResponse,
};
use crate::comment::adapter::incoming::web::routes::{
    CreateCommentRequest, DeleteCommentResponse, UpdateCommentRequest,
};
use crate::post::adapter::incoming::web::routes::{
    CreatePostRequest, PostCountResponse, UpdatePostRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "1.0.0",
        description = "Posts, comments, categories and accounts, with cascading deletes and image replacement"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_user_email_handler,

        // Users
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::count_users_handler,
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_user_profile_handler,
        crate::cascade::adapter::incoming::web::routes::upload_profile_photo_handler,
        crate::cascade::adapter::incoming::web::routes::delete_user_handler,

        // Posts
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::get_posts_handler,
        crate::post::adapter::incoming::web::routes::count_posts_handler,
        crate::post::adapter::incoming::web::routes::get_single_post_handler,
        crate::post::adapter::incoming::web::routes::update_post_handler,
        crate::post::adapter::incoming::web::routes::toggle_like_handler,
        crate::cascade::adapter::incoming::web::routes::update_post_image_handler,
        crate::cascade::adapter::incoming::web::routes::delete_post_handler,

        // Comments
        crate::comment::adapter::incoming::web::routes::create_comment_handler,
        crate::comment::adapter::incoming::web::routes::get_comments_handler,
        crate::comment::adapter::incoming::web::routes::update_comment_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment_handler,

        // Categories
        crate::category::adapter::incoming::web::routes::create_category_handler,
        crate::category::adapter::incoming::web::routes::get_categories_handler,
        crate::category::adapter::incoming::web::routes::delete_category_handler,

        // Admin
        crate::admin::adapter::incoming::web::routes::get_admin_stats_handler,
    ),
    components(
        schemas(
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            VerifyEmailResponse,
            UserProfileResponse,
            UserCountResponse,
            UpdateUserRequest,

            CreatePostRequest,
            UpdatePostRequest,
            PostCountResponse,

            CreateCommentRequest,
            UpdateCommentRequest,
            DeleteCommentResponse,

            CreateCategoryRequest,
            DeleteCategoryResponse,

            AdminStats,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and email verification"),
        (name = "users", description = "Profiles, profile photos and account deletion"),
        (name = "posts", description = "Posts, likes, images and post deletion"),
        (name = "comments", description = "Comments on posts"),
        (name = "categories", description = "Post categories"),
        (name = "admin", description = "Dashboard statistics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
