use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by business, catalog, public menu, and newsletter operations.
///
/// The `Display` text of each variant is what the client shows to the user.
#[derive(Error, Debug, PartialEq)]
pub enum MenuError {
    #[error("A business with this name already exists. Please choose a different name.")]
    AliasTaken,
    #[error("This alias is already in use. Please choose a different one.")]
    AliasInUse,
    #[error("This email is already subscribed to our newsletter.")]
    AlreadySubscribed,
    #[error("An account with this email already exists.")]
    EmailTaken,
    #[error("Business not found")]
    BusinessNotFound,
    #[error("Menu not found")]
    MenuNotFound,
    #[error("Category not found")]
    CategoryNotFound,
    #[error("Item not found")]
    ItemNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("{0}")]
    Validation(String),
}

impl MenuError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::AliasTaken | Self::AliasInUse | Self::AlreadySubscribed | Self::EmailTaken => {
                StatusCode::CONFLICT
            }
            Self::BusinessNotFound
            | Self::MenuNotFound
            | Self::CategoryNotFound
            | Self::ItemNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, "{}", self);

        error_response(status, self.to_string())
    }
}
