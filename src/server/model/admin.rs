use std::{collections::HashSet, sync::Arc};

use crate::{
    model::user::SessionDto,
    server::error::{auth::AuthError, Error},
};

/// Emails granted admin capabilities.
///
/// Matching is case-insensitive. An empty list means nobody is an admin.
#[derive(Clone, Debug, Default)]
pub struct AdminAllowList(Arc<HashSet<String>>);

impl AdminAllowList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(Arc::new(
            emails
                .into_iter()
                .map(|email| email.as_ref().trim().to_lowercase())
                .filter(|email| !email.is_empty())
                .collect(),
        ))
    }

    pub fn is_admin(&self, email: &str) -> bool {
        self.0.contains(&email.trim().to_lowercase())
    }
}

/// Fails with 403 unless the signed in user is on the allow-list.
pub fn require_admin(user: &SessionDto) -> Result<(), Error> {
    if user.is_admin {
        Ok(())
    } else {
        Err(AuthError::AdminRequired(user.user_id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::AdminAllowList;

    #[test]
    fn matches_case_insensitively() {
        let admins = AdminAllowList::new(["Admin@Example.com"]);

        assert!(admins.is_admin("admin@example.com"));
        assert!(admins.is_admin(" ADMIN@example.COM "));
        assert!(!admins.is_admin("owner@example.com"));
    }

    #[test]
    fn empty_list_has_no_admins() {
        assert!(!AdminAllowList::default().is_admin(""));
    }
}
