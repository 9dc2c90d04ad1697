use axum::extract::Query;
use menuboard::{
    model::user::UserDto,
    server::controller::user::{search_users, UserSearchParams},
};

use super::*;

fn search(term: &str) -> Query<UserSearchParams> {
    Query(UserSearchParams {
        search: term.to_string(),
    })
}

#[tokio::test]
/// Expect 403 for a signed in user outside the allow-list
async fn search_requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let user = test.user().insert_user("owner@example.com").await?;
    sign_in_as(&test, user.id).await;

    let result = search_users(
        State(test.into_app_state()),
        test.session.clone(),
        search("owner"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect matching accounts for an admin, nothing for terms under 3 characters
async fn admin_searches_by_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .with_admin()
        .build()
        .await?;
    let admin = test.user().insert_user(TEST_ADMIN_EMAIL).await?;
    test.user().insert_user("joe@diner.example").await?;
    test.user().insert_user("ann@salon.example").await?;
    sign_in_as(&test, admin.id).await;
    let state = test.into_app_state();

    let result = search_users(State(state.clone()), test.session.clone(), search("diner")).await;
    let users: Vec<UserDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "joe@diner.example");

    let result = search_users(State(state), test.session.clone(), search("jo")).await;
    let users: Vec<UserDto> = body_json(result.unwrap().into_response()).await;
    assert!(users.is_empty());

    Ok(())
}
