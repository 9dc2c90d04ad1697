use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::SessionDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
    },
};

/// Retrieves the signed in user from session and then from database
///
/// The session is checked first, so a request without a signed in user never reaches the
/// database.
///
/// # Returns
/// - `Ok(SessionDto)`: User found, with the admin flag from the allow-list
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID in session but the account
///   is gone (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<SessionDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(SessionDto {
        user_id: user.id,
        is_admin: state.admins.is_admin(&user.email),
        email: user.email,
    })
}
