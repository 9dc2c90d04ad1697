use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::BusinessModel, TestContext};

impl TestContext {
    pub fn business(&self) -> BusinessFixtures<'_> {
        BusinessFixtures { context: self }
    }
}

pub struct BusinessFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> BusinessFixtures<'a> {
    /// Insert a restaurant priced in EUR with an address and no contact details.
    pub async fn insert_business(
        &self,
        user_id: i32,
        name: &str,
        alias: &str,
    ) -> Result<BusinessModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Business::insert(entity::business::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                address: ActiveValue::Set("1 Harbour Street".to_string()),
                phone: ActiveValue::Set(None),
                email: ActiveValue::Set(None),
                alias: ActiveValue::Set(alias.to_string()),
                currency_code: ActiveValue::Set("EUR".to_string()),
                business_type: ActiveValue::Set("restaurant".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
