use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::user::is_valid_email,
    server::{
        data::{is_unique_violation, subscriber::SubscriberRepository},
        error::{menu::MenuError, Error},
        service::auth::normalize_email,
    },
};

pub struct NewsletterService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsletterService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an email to the newsletter list.
    ///
    /// # Returns
    /// - `Ok(())` - Subscribed
    /// - `Err(Error::MenuError(MenuError::Validation))` - Malformed email
    /// - `Err(Error::MenuError(MenuError::AlreadySubscribed))` - Email already on the list
    pub async fn subscribe(&self, email: &str) -> Result<(), Error> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(MenuError::validation("Please enter a valid email address").into());
        }

        match SubscriberRepository::new(self.db).create(&email).await {
            Ok(subscriber) => {
                tracing::debug!(subscriber_id = %subscriber.id, "New newsletter subscriber");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => Err(MenuError::AlreadySubscribed.into()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use menuboard_test_utils::prelude::*;

    use crate::server::{
        error::{menu::MenuError, Error},
        service::newsletter::NewsletterService,
    };

    /// Expect a repeated subscription, in any case, to conflict
    #[tokio::test]
    async fn rejects_repeated_subscription() -> Result<(), TestError> {
        let test = TestBuilder::new().with_menu_tables().build().await?;

        let newsletter_service = NewsletterService::new(&test.db);
        let first = newsletter_service.subscribe("reader@example.com").await;
        let second = newsletter_service.subscribe(" Reader@Example.com").await;

        assert!(first.is_ok());
        assert!(matches!(
            second,
            Err(Error::MenuError(MenuError::AlreadySubscribed))
        ));

        Ok(())
    }

    /// Expect malformed emails to be rejected
    #[tokio::test]
    async fn rejects_malformed_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_menu_tables().build().await?;

        let newsletter_service = NewsletterService::new(&test.db);
        let result = newsletter_service.subscribe("reader").await;

        assert!(matches!(
            result,
            Err(Error::MenuError(MenuError::Validation(_)))
        ));

        Ok(())
    }
}
