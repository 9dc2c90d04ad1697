use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct SubscriberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriberRepository<'a, C> {
    /// Creates a new instance of [`SubscriberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an email to the newsletter list, fails with a unique violation if already present
    pub async fn create(&self, email: &str) -> Result<entity::newsletter_subscriber::Model, DbErr> {
        let subscriber = entity::newsletter_subscriber::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        subscriber.insert(self.db).await
    }
}
