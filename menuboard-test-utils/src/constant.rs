//! Constant values shared by tests.

/// Password of every account inserted by the user fixtures.
pub static TEST_PASSWORD: &str = "correct horse battery";

/// Email placed on the admin allow-list by [`TestBuilder::with_admin`](crate::TestBuilder::with_admin).
pub static TEST_ADMIN_EMAIL: &str = "admin@menuboard.test";

/// Public origin handed to the application state in tests.
pub static TEST_PUBLIC_URL: &str = "http://localhost:8080";
