use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

const RAW_TOKEN_LEN: usize = 64;

/// Hash a token using SHA-256 for storage.
/// Raw tokens only ever leave the process inside the verification email.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn generate_raw_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RAW_TOKEN_LEN)
        .map(char::from)
        .collect()
}
