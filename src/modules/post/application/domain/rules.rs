pub const TITLE_MIN: usize = 2;
pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MIN: usize = 10;

pub fn validate_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    let len = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
        return Err(format!(
            "Title must be between {TITLE_MIN} and {TITLE_MAX} characters"
        ));
    }
    Ok(title.to_string())
}

pub fn validate_description(description: &str) -> Result<String, String> {
    let description = description.trim();
    if description.chars().count() < DESCRIPTION_MIN {
        return Err(format!(
            "Description must be at least {DESCRIPTION_MIN} characters"
        ));
    }
    Ok(description.to_string())
}
