use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account, `email` is expected to be normalized already
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<entity::app_user::Model, DbErr> {
        let user = entity::app_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Accounts whose email contains `term`, sorted by email
    pub async fn search_by_email(
        &self,
        term: &str,
        limit: u64,
    ) -> Result<Vec<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.contains(term))
            .order_by_asc(entity::app_user::Column::Email)
            .limit(limit)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use menuboard_test_utils::prelude::*;

        use crate::server::data::{is_unique_violation, user::UserRepository};

        /// Expect success when creating a new account
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("owner@example.com", "hash").await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().email, "owner@example.com");

            Ok(())
        }

        /// Expect a unique violation when the email is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;
            test.user().insert_user("owner@example.com").await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("owner@example.com", "hash").await;

            assert!(result.as_ref().is_err_and(is_unique_violation));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("owner@example.com", "hash").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find {
        use menuboard_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Some for an existing account looked up by ID and by email
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;
            let user_model = test.user().insert_user("owner@example.com").await?;

            let user_repository = UserRepository::new(&test.db);

            let by_id = user_repository.get(user_model.id).await?;
            let by_email = user_repository.find_by_email("owner@example.com").await?;

            assert_eq!(by_id, Some(user_model.clone()));
            assert_eq!(by_email, Some(user_model));

            Ok(())
        }

        /// Expect None for an unknown account
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);

            assert!(user_repository.get(1).await?.is_none());
            assert!(user_repository
                .find_by_email("nobody@example.com")
                .await?
                .is_none());

            Ok(())
        }
    }

    mod search_by_email {
        use menuboard_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect only matching accounts, capped at the limit
        #[tokio::test]
        async fn returns_matches_up_to_limit() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;
            for i in 0..7 {
                test.user()
                    .insert_user(&format!("chef{i}@bistro.example"))
                    .await?;
            }
            test.user().insert_user("barber@shop.example").await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.search_by_email("bistro", 5).await?;

            assert_eq!(result.len(), 5);
            assert!(result.iter().all(|u| u.email.contains("bistro")));

            Ok(())
        }
    }
}
