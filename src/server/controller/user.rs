use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{admin::require_admin, app::AppState},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct UserSearchParams {
    /// Part of an email, at least 3 characters
    #[serde(default)]
    pub search: String,
}

/// Search accounts by email, admin only
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserSearchParams),
    responses(
        (status = 200, description = "Up to 5 matching accounts", body = Vec<UserDto>),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_admin(&user)?;

    let users = UserService::new(&state.db).search(&params.search).await?;

    Ok((StatusCode::OK, Json(users)))
}
