//! Required-field checks. Each returns human-readable messages in field
//! order; an empty list means the input is acceptable.

/// `Some(message)` when `value` is blank.
pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Vec<String> {
    [required(username, "Username"), required(password, "Password")]
        .into_iter()
        .flatten()
        .collect()
}
