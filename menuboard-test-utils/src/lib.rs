//! Test scaffolding for menuboard.
//!
//! Tests build a [`TestContext`] through [`TestBuilder`]: an in-memory SQLite database with the
//! menu tables, a memory-backed session, and the admin allow-list the server should see.
//! Fixture helpers (`test.user()`, `test.business()`, `test.catalog()`) insert rows directly,
//! bypassing the code under test.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_EMAIL, TEST_PASSWORD, TEST_PUBLIC_URL},
        TestBuilder, TestContext, TestError,
    };
}
