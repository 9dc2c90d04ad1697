use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CategoryModel, ItemModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_category(
        &self,
        business_id: i32,
        name: &str,
        order: i32,
    ) -> Result<CategoryModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MenuCategory::insert(entity::menu_category::ActiveModel {
                business_id: ActiveValue::Set(business_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                order: ActiveValue::Set(order),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_item(
        &self,
        category_id: i32,
        name: &str,
        price: f64,
        order: i32,
    ) -> Result<ItemModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MenuItem::insert(entity::menu_item::ActiveModel {
                category_id: ActiveValue::Set(category_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                price: ActiveValue::Set(price),
                order: ActiveValue::Set(order),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
