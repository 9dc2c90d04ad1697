use super::{post_json, ApiError};
use crate::model::newsletter::SubscribeDto;

/// Subscribes `email`, returns the confirmation message.
pub async fn subscribe(email: &str) -> Result<String, ApiError> {
    post_json(
        "/api/newsletter",
        &SubscribeDto {
            email: email.to_string(),
        },
    )
    .await
}
