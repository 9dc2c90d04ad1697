use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CredentialsDto, SessionDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create an account and sign it in
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Account created and signed in", body = SessionDto),
        (status = 400, description = "Malformed email or password too short", body = ErrorDto),
        (status = 409, description = "An account with this email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).sign_up(&credentials).await?;

    SessionUserId::insert(&session, user.id).await?;

    let session_dto = SessionDto {
        user_id: user.id,
        is_admin: state.admins.is_admin(&user.email),
        email: user.email,
    };

    Ok((StatusCode::CREATED, Json(session_dto)))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed in", body = SessionDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).sign_in(&credentials).await?;

    SessionUserId::insert(&session, user.id).await?;

    let session_dto = SessionDto {
        user_id: user.id,
        is_admin: state.admins.is_admin(&user.email),
        email: user.email,
    };

    Ok((StatusCode::OK, Json(session_dto)))
}

/// Sign out by clearing the session, then go home
#[utoipa::path(
    get,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing an empty session is an error in the store, only clear a signed in one
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// The signed in user, if any
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in user", body = SessionDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
