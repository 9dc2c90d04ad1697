use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_PASSWORD,
    error::TestError,
    model::{BusinessModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an account whose password is [`TEST_PASSWORD`].
    ///
    /// Uses minimal Argon2id cost parameters, verification reads them back from the hash.
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        let params =
            Params::new(8, 1, 1, None).map_err(|e| TestError::PasswordHash(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert an account owning one business named after its alias.
    pub async fn insert_user_with_business(
        &self,
        email: &str,
        alias: &str,
    ) -> Result<(UserModel, BusinessModel), TestError> {
        let user_model = self.insert_user(email).await?;
        let business_model = self
            .context
            .business()
            .insert_business(user_model.id, alias, alias)
            .await?;

        Ok((user_model, business_model))
    }
}
