use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        business_id: i32,
        name: &str,
        description: Option<String>,
        order: i32,
    ) -> Result<entity::menu_category::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let category = entity::menu_category::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            order: ActiveValue::Set(order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get(
        &self,
        category_id: i32,
    ) -> Result<Option<entity::menu_category::Model>, DbErr> {
        entity::prelude::MenuCategory::find_by_id(category_id)
            .one(self.db)
            .await
    }

    /// Number of categories a business currently has
    pub async fn count_by_business(&self, business_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::BusinessId.eq(business_id))
            .count(self.db)
            .await
    }

    /// Categories of a business by ascending `order`, ties broken by ID
    pub async fn list_by_business(
        &self,
        business_id: i32,
    ) -> Result<Vec<entity::menu_category::Model>, DbErr> {
        entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::menu_category::Column::Order)
            .order_by_asc(entity::menu_category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        category_id: i32,
        name: &str,
        description: Option<String>,
    ) -> Result<Option<entity::menu_category::Model>, DbErr> {
        let Some(category) = self.get(category_id).await? else {
            return Ok(None);
        };

        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(name.to_string());
        category_am.description = ActiveValue::Set(description);
        category_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let category = category_am.update(self.db).await?;

        Ok(Some(category))
    }

    /// Deletes a category together with its items
    ///
    /// Returns OK regardless of the category existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MenuCategory::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
