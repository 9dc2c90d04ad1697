use menuboard::{
    model::newsletter::{SubscribeDto, SUBSCRIBED_MESSAGE},
    server::controller::newsletter::subscribe,
};

use super::*;

fn email(address: &str) -> Json<SubscribeDto> {
    Json(SubscribeDto {
        email: address.to_string(),
    })
}

#[tokio::test]
/// Expect 201 with the confirmation message, no session needed
async fn subscribes_new_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;

    let result = subscribe(State(test.into_app_state()), email("reader@example.com")).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let message: String = body_json(resp).await;
    assert_eq!(message, SUBSCRIBED_MESSAGE);

    Ok(())
}

#[tokio::test]
/// Expect 409 on a second subscription, case and whitespace aside
async fn conflicts_on_existing_subscriber() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let state = test.into_app_state();

    let first = subscribe(State(state.clone()), email("reader@example.com")).await;
    assert!(first.is_ok());

    let result = subscribe(State(state), email("  Reader@Example.com ")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a malformed email
async fn rejects_malformed_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;

    let result = subscribe(State(test.into_app_state()), email("not-an-email")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
