use super::{get_json, post_json, ApiError};
use crate::model::user::{CredentialsDto, SessionDto};

/// The signed in user, `None` when the server answers 401.
pub async fn get_session() -> Result<Option<SessionDto>, ApiError> {
    match get_json::<SessionDto>("/api/auth/session").await {
        Ok(session) => Ok(Some(session)),
        Err(err) if err.is_unauthorized() => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn sign_in(credentials: &CredentialsDto) -> Result<SessionDto, ApiError> {
    post_json("/api/auth/signin", credentials).await
}

pub async fn sign_up(credentials: &CredentialsDto) -> Result<SessionDto, ApiError> {
    post_json("/api/auth/signup", credentials).await
}

/// Clears the server session, the redirect the server answers with is followed and ignored.
pub async fn sign_out() -> Result<(), ApiError> {
    super::send(super::Method::Get, "/api/auth/signout", None)
        .await
        .map(|_| ())
}
