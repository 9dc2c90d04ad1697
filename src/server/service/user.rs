use sea_orm::ConnectionTrait;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

/// Shortest search term that triggers a lookup.
pub const MIN_SEARCH_LENGTH: usize = 3;

/// Most accounts returned by one search.
pub const SEARCH_LIMIT: u64 = 5;

/// Read access to the public projection of accounts: ID and email.
pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(|user| UserDto {
            id: user.id,
            email: user.email,
        }))
    }

    /// Accounts whose email contains `term`, case-insensitive.
    ///
    /// Terms shorter than [`MIN_SEARCH_LENGTH`] return nothing without querying.
    pub async fn search(&self, term: &str) -> Result<Vec<UserDto>, Error> {
        let term = term.trim().to_lowercase();
        if term.chars().count() < MIN_SEARCH_LENGTH {
            return Ok(Vec::new());
        }

        let users = UserRepository::new(self.db)
            .search_by_email(&term, SEARCH_LIMIT)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| UserDto {
                id: user.id,
                email: user.email,
            })
            .collect())
    }
}
