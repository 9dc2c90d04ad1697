use sea_orm::DatabaseConnection;

use crate::server::model::admin::AdminAllowList;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub admins: AdminAllowList,
    /// Public origin for menu links, without trailing slash
    pub public_url: String,
}

/// Builds state from the pieces a test context provides.
impl From<(DatabaseConnection, Vec<String>, String)> for AppState {
    fn from((db, admin_emails, public_url): (DatabaseConnection, Vec<String>, String)) -> Self {
        Self {
            db,
            admins: AdminAllowList::new(admin_emails),
            public_url,
        }
    }
}
