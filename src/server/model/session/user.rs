use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "menuboard:user:id";

/// ID of the signed in account, stored as a string in the session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    ///
    /// Cycles the session ID first so a pre-auth session cookie can't be reused.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.cycle_id().await?;
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    mod insert {
        use menuboard_test_utils::prelude::*;

        use crate::server::model::session::user::SessionUserId;

        /// Expect the inserted ID to be readable back from the session
        #[tokio::test]
        async fn stores_user_id() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            SessionUserId::insert(&test.session, 7).await.unwrap();
            let user_id = SessionUserId::get(&test.session).await.unwrap();

            assert_eq!(user_id, Some(7));

            Ok(())
        }

        /// Expect a second sign in to replace the previous user ID
        #[tokio::test]
        async fn replaces_previous_user_id() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            SessionUserId::insert(&test.session, 1).await.unwrap();
            SessionUserId::insert(&test.session, 2).await.unwrap();

            assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(2));

            Ok(())
        }
    }

    mod get {
        use menuboard_test_utils::prelude::*;

        use crate::server::model::session::user::{SessionUserId, SESSION_USER_ID_KEY};

        /// Expect None when nobody signed in
        #[tokio::test]
        async fn returns_none_for_empty_session() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let result = SessionUserId::get(&test.session).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect None after the session is cleared on sign out
        #[tokio::test]
        async fn returns_none_after_clear() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            SessionUserId::insert(&test.session, 3).await.unwrap();

            test.session.clear().await;

            assert!(matches!(SessionUserId::get(&test.session).await, Ok(None)));

            Ok(())
        }

        /// Expect parse error when the stored value is not an i32
        #[tokio::test]
        async fn fails_for_malformed_id() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            test.session
                .insert(SESSION_USER_ID_KEY, SessionUserId("not-a-number".to_string()))
                .await?;

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
