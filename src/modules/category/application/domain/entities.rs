use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const TITLE_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

pub fn validate_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Category title is required".to_string());
    }
    if title.chars().count() > TITLE_MAX {
        return Err(format!("Category title must be at most {TITLE_MAX} characters"));
    }
    Ok(title.to_string())
}
