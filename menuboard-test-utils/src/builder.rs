//! Declarative test builder.
//!
//! Configuration methods are chained on [`TestBuilder`] and everything is executed in
//! [`TestBuilder::build`].

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_ADMIN_EMAIL, error::TestError, TestContext};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_menu_tables: bool,
    admin_emails: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables and no admins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create every application table: accounts, businesses, categories, items, and
    /// newsletter subscribers.
    pub fn with_menu_tables(mut self) -> Self {
        self.include_menu_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, after the menu tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Put [`TEST_ADMIN_EMAIL`] on the admin allow-list.
    pub fn with_admin(self) -> Self {
        self.with_admin_email(TEST_ADMIN_EMAIL)
    }

    /// Put an email on the admin allow-list.
    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_emails.push(email.into());
        self
    }

    /// Build the test context, creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Connecting or creating tables failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new(self.admin_emails).await?;

        let mut all_tables = Vec::new();

        if self.include_menu_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            // Parents before children so foreign keys resolve
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::Business),
                schema.create_table_from_entity(entity::prelude::MenuCategory),
                schema.create_table_from_entity(entity::prelude::MenuItem),
                schema.create_table_from_entity(entity::prelude::NewsletterSubscriber),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}
