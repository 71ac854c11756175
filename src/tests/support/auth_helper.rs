use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "blog-backend-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// Registered as `web::Data<Arc<dyn TokenProvider>>`, the shape the auth
/// extractors look up.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value for a caller with the given claims.
pub fn bearer(user_id: Uuid, is_verified: bool, is_admin: bool) -> String {
    let token = test_jwt_service()
        .generate_access_token(user_id, is_verified, is_admin)
        .expect("test token should encode");
    format!("Bearer {token}")
}
