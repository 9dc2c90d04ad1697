use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::user::{is_valid_email, CredentialsDto, MIN_PASSWORD_LENGTH},
    server::{
        data::{is_unique_violation, user::UserRepository},
        error::{auth::AuthError, menu::MenuError, Error},
        model::db::UserModel,
        service::password::{hash_password, verify_password},
    },
};

/// Emails are stored trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Account creation and credential checks.
pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an account.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The new account
    /// - `Err(Error::MenuError(MenuError::Validation))` - Malformed email or short password
    /// - `Err(Error::MenuError(MenuError::EmailTaken))` - An account with this email exists
    pub async fn sign_up(&self, credentials: &CredentialsDto) -> Result<UserModel, Error> {
        let email = normalize_email(&credentials.email);
        if !is_valid_email(&email) {
            return Err(MenuError::validation("Please enter a valid email address").into());
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(MenuError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            ))
            .into());
        }

        let password_hash = hash_password(&credentials.password)?;

        match UserRepository::new(self.db)
            .create(&email, &password_hash)
            .await
        {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Created account");
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(MenuError::EmailTaken.into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks credentials, unknown email and wrong password fail the same way.
    pub async fn sign_in(&self, credentials: &CredentialsDto) -> Result<UserModel, Error> {
        let email = normalize_email(&credentials.email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
