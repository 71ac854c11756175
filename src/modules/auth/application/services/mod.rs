pub mod token_hasher;
pub mod credentials_policy;
