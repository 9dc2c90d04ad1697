use super::{get_json, ApiError};
use crate::model::user::UserDto;

/// Admin lookup of accounts by part of their email.
pub async fn search_users(term: &str) -> Result<Vec<UserDto>, ApiError> {
    let term: String = term
        .chars()
        .map(|c| match c {
            '&' => "%26".to_string(),
            '#' => "%23".to_string(),
            '+' => "%2B".to_string(),
            ' ' => "%20".to_string(),
            '%' => "%25".to_string(),
            c => c.to_string(),
        })
        .collect();

    get_json(&format!("/api/users?search={}", term)).await
}
