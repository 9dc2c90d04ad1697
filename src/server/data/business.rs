use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::business::{BusinessType, Currency};

/// Settings written by [`BusinessRepository::update`], already validated.
pub struct BusinessSettings {
    pub name: String,
    pub alias: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency: Currency,
    pub business_type: BusinessType,
}

pub struct BusinessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessRepository<'a, C> {
    /// Creates a new instance of [`BusinessRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a business with an empty address, no contact details, and EUR pricing
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        alias: &str,
        business_type: BusinessType,
    ) -> Result<entity::business::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let business = entity::business::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(String::new()),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            alias: ActiveValue::Set(alias.to_string()),
            currency_code: ActiveValue::Set(Currency::default().code().to_string()),
            business_type: ActiveValue::Set(business_type.id().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        business.insert(self.db).await
    }

    pub async fn get(&self, business_id: i32) -> Result<Option<entity::business::Model>, DbErr> {
        entity::prelude::Business::find_by_id(business_id)
            .one(self.db)
            .await
    }

    /// Exact, case-sensitive alias match
    pub async fn find_by_alias(
        &self,
        alias: &str,
    ) -> Result<Option<entity::business::Model>, DbErr> {
        entity::prelude::Business::find()
            .filter(entity::business::Column::Alias.eq(alias))
            .one(self.db)
            .await
    }

    /// Lists businesses newest first, all of them when `owner_id` is `None`
    pub async fn list(&self, owner_id: Option<i32>) -> Result<Vec<entity::business::Model>, DbErr> {
        let mut query = entity::prelude::Business::find();
        if let Some(owner_id) = owner_id {
            query = query.filter(entity::business::Column::UserId.eq(owner_id));
        }

        query
            .order_by_desc(entity::business::Column::CreatedAt)
            .order_by_desc(entity::business::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        business_id: i32,
        settings: BusinessSettings,
    ) -> Result<Option<entity::business::Model>, DbErr> {
        let Some(business) = self.get(business_id).await? else {
            return Ok(None);
        };

        let mut business_am = business.into_active_model();
        business_am.name = ActiveValue::Set(settings.name);
        business_am.alias = ActiveValue::Set(settings.alias);
        business_am.address = ActiveValue::Set(settings.address);
        business_am.phone = ActiveValue::Set(settings.phone);
        business_am.email = ActiveValue::Set(settings.email);
        business_am.currency_code = ActiveValue::Set(settings.currency.code().to_string());
        business_am.business_type = ActiveValue::Set(settings.business_type.id().to_string());
        business_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let business = business_am.update(self.db).await?;

        Ok(Some(business))
    }

    /// Overwrites the owner of a business
    pub async fn set_owner(
        &self,
        business_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::business::Model>, DbErr> {
        let Some(business) = self.get(business_id).await? else {
            return Ok(None);
        };

        let mut business_am = business.into_active_model();
        business_am.user_id = ActiveValue::Set(user_id);
        business_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let business = business_am.update(self.db).await?;

        Ok(Some(business))
    }

    /// Deletes a business, its categories and items go with it through the cascade rules
    ///
    /// Returns OK regardless of the business existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, business_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Business::delete_by_id(business_id)
            .exec(self.db)
            .await
    }
}
