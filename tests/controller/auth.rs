use menuboard::{
    model::user::{CredentialsDto, SessionDto},
    server::{
        controller::auth::{get_session, signin, signout, signup},
        model::session::user::SessionUserId,
    },
};

use super::*;

fn credentials(email: &str, password: &str) -> CredentialsDto {
    CredentialsDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 201 with the new account signed in
async fn signup_creates_account_and_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;

    let result = signup(
        State(test.into_app_state()),
        test.session.clone(),
        Json(credentials("Owner@Example.com", "long enough password")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let session: SessionDto = body_json(resp).await;
    assert_eq!(session.email, "owner@example.com");
    assert!(!session.is_admin);
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(session.user_id)
    );

    Ok(())
}

#[tokio::test]
/// Expect 409 when the email already has an account
async fn signup_conflicts_on_existing_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    test.user().insert_user("owner@example.com").await?;

    let result = signup(
        State(test.into_app_state()),
        test.session.clone(),
        Json(credentials("owner@example.com", "long enough password")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a password below the minimum length
async fn signup_rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;

    let result = signup(
        State(test.into_app_state()),
        test.session.clone(),
        Json(credentials("owner@example.com", "short")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 and the admin flag for an allow-listed account
async fn signin_flags_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .with_admin()
        .build()
        .await?;
    test.user().insert_user(TEST_ADMIN_EMAIL).await?;

    let result = signin(
        State(test.into_app_state()),
        test.session.clone(),
        Json(credentials(TEST_ADMIN_EMAIL, TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session: SessionDto = body_json(resp).await;
    assert!(session.is_admin);

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password, with nothing put in session
async fn signin_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    test.user().insert_user("owner@example.com").await?;

    let result = signin(
        State(test.into_app_state()),
        test.session.clone(),
        Json(credentials("owner@example.com", "not the password")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after sign out with a user ID in session
async fn signout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in_as(&test, 1).await;

    let result = signout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after sign out even without session data
///
/// Clearing an empty session errors in the store, the handler only clears a signed in one.
async fn signout_without_session_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = signout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the signed in user
async fn session_returns_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let user = test.user().insert_user("owner@example.com").await?;
    sign_in_as(&test, user.id).await;

    let result = get_session(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session: SessionDto = body_json(resp).await;
    assert_eq!(session.user_id, user.id);

    Ok(())
}

#[tokio::test]
/// Expect 401 without touching the database when nobody is signed in
///
/// No tables exist, so any query would answer 500 instead.
async fn session_without_user_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_session(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 and a cleared session when the signed in account no longer exists
async fn session_for_deleted_user_is_cleared() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    sign_in_as(&test, 42).await;

    let result = get_session(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
