use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;
pub const BIO_MAX_LEN: usize = 500;

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{3,30}$").expect("valid username regex"))
}

/// Returns the trimmed username.
pub fn validate_username(username: &str) -> Result<String, String> {
    let username = username.trim();

    if !username_regex().is_match(username) {
        return Err(
            "Username must be 3-30 characters of letters, digits or underscores".to_string(),
        );
    }

    Ok(username.to_string())
}

/// Returns the normalized (trimmed, lowercased) email.
pub fn validate_email(email: &str) -> Result<String, String> {
    let email = email.trim();

    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    if !EmailAddress::is_valid(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(email.to_lowercase())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let len = password.chars().count();

    if len < PASSWORD_MIN_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        ));
    }

    if len > PASSWORD_MAX_LEN {
        return Err(format!(
            "Password must be at most {} characters",
            PASSWORD_MAX_LEN
        ));
    }

    Ok(())
}

pub fn validate_bio(bio: &str) -> Result<String, String> {
    let bio = bio.trim();

    if bio.chars().count() > BIO_MAX_LEN {
        return Err(format!("Bio must be at most {} characters", BIO_MAX_LEN));
    }

    Ok(bio.to_string())
}
