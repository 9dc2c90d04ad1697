use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        newsletter::{SubscribeDto, SUBSCRIBED_MESSAGE},
    },
    server::{error::Error, model::app::AppState, service::newsletter::NewsletterService},
};

pub static NEWSLETTER_TAG: &str = "newsletter";

/// Subscribe an email address to the newsletter
#[utoipa::path(
    post,
    path = "/api/newsletter",
    tag = NEWSLETTER_TAG,
    request_body = SubscribeDto,
    responses(
        (status = 201, description = "Subscribed, body holds the confirmation message", body = String),
        (status = 400, description = "Malformed email", body = ErrorDto),
        (status = 409, description = "Already subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribeDto>,
) -> Result<impl IntoResponse, Error> {
    NewsletterService::new(&state.db)
        .subscribe(&payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(SUBSCRIBED_MESSAGE)))
}
