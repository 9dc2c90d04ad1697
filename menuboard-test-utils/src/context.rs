//! Test context structure and utilities.
//!
//! The `TestContext` is returned by `TestBuilder::build()` and holds the in-memory SQLite
//! database, a memory-backed session, and the admin allow-list for the test.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_PUBLIC_URL, error::TestError};

/// Test environment created by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let test = TestBuilder::new().with_menu_tables().build().await?;
///
/// let (user, business) = test
///     .user()
///     .insert_user_with_business("owner@example.com", "joes-diner")
///     .await?;
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
    /// Emails the application should treat as admins
    pub admin_emails: Vec<String>,
}

impl TestContext {
    /// Convert the context into any type that can be constructed from its parts
    ///
    /// This allows conversion to `AppState` without the test-utils crate depending on the
    /// main menuboard crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, Vec<String>, String)>,
    {
        T::from((
            self.db.clone(),
            self.admin_emails.clone(),
            TEST_PUBLIC_URL.to_string(),
        ))
    }

    /// Create a new test context without any tables.
    pub(crate) async fn new(admin_emails: Vec<String>) -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            admin_emails,
        })
    }

    /// Execute CREATE TABLE statements, in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
