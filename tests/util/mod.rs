//! Shared helpers for controller integration tests.

use axum::{body::to_bytes, response::Response};
use menuboard::server::model::{app::AppState, session::user::SessionUserId};
use menuboard_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Extension trait turning a [`TestContext`] into the state handlers receive
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Puts `user_id` into the test session as if that user had signed in
pub async fn sign_in_as(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id)
        .await
        .expect("Failed to insert user ID into session");
}

/// Reads a JSON response body
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}
