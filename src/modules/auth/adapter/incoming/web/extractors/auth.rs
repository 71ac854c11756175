use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Represents an authenticated user (verified or not)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_verified: bool,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.is_admin)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                is_verified: claims.is_verified,
                is_admin: claims.is_admin,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Represents a verified authenticated user
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl VerifiedUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.is_admin)
    }
}

impl FromRequest for VerifiedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(auth_user) if !auth_user.is_verified => {
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "EMAIL_NOT_VERIFIED",
                    "Email verification required",
                ))))
            }
            Ok(auth_user) => ready(Ok(VerifiedUser {
                user_id: auth_user.user_id,
                is_admin: auth_user.is_admin,
            })),
            Err(e) => ready(Err(e)),
        }
    }
}

/// Authenticated user carrying the admin claim
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl AdminUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, true)
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(auth_user) if !auth_user.is_admin => {
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_ONLY",
                    "Only admins can access this resource",
                ))))
            }
            Ok(auth_user) => ready(Ok(AdminUser {
                user_id: auth_user.user_id,
            })),
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
