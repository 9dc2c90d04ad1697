use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Item fields written on create and update, already validated.
pub struct ItemFields {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        fields: ItemFields,
        order: i32,
    ) -> Result<entity::menu_item::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let item = entity::menu_item::ActiveModel {
            category_id: ActiveValue::Set(fields.category_id),
            name: ActiveValue::Set(fields.name),
            description: ActiveValue::Set(fields.description),
            price: ActiveValue::Set(fields.price),
            order: ActiveValue::Set(order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get(&self, item_id: i32) -> Result<Option<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find_by_id(item_id)
            .one(self.db)
            .await
    }

    /// Number of items currently filed under a category
    pub async fn count_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await
    }

    /// Items of the given categories by ascending `order`, ties broken by ID
    pub async fn list_by_categories(
        &self,
        category_ids: &[i32],
    ) -> Result<Vec<entity::menu_item::Model>, DbErr> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CategoryId.is_in(category_ids.iter().copied()))
            .order_by_asc(entity::menu_item::Column::Order)
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates an item, `fields.category_id` may move it to another category
    ///
    /// The item keeps its `order` when moved.
    pub async fn update(
        &self,
        item_id: i32,
        fields: ItemFields,
    ) -> Result<Option<entity::menu_item::Model>, DbErr> {
        let Some(item) = self.get(item_id).await? else {
            return Ok(None);
        };

        let mut item_am = item.into_active_model();
        item_am.category_id = ActiveValue::Set(fields.category_id);
        item_am.name = ActiveValue::Set(fields.name);
        item_am.description = ActiveValue::Set(fields.description);
        item_am.price = ActiveValue::Set(fields.price);
        item_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let item = item_am.update(self.db).await?;

        Ok(Some(item))
    }

    /// Returns OK regardless of the item existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MenuItem::delete_by_id(item_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod list_by_categories {
        use menuboard_test_utils::prelude::*;

        use crate::server::data::item::ItemRepository;

        /// Expect no query and no items for an empty category list
        #[tokio::test]
        async fn returns_empty_for_no_categories() -> Result<(), TestError> {
            // No tables: a query would fail
            let test = TestBuilder::new().build().await?;

            let item_repository = ItemRepository::new(&test.db);
            let result = item_repository.list_by_categories(&[]).await;

            assert!(matches!(result, Ok(items) if items.is_empty()));

            Ok(())
        }

        /// Expect only items of the listed categories, sorted by order
        #[tokio::test]
        async fn returns_items_of_listed_categories() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;
            let (_, business) = test
                .user()
                .insert_user_with_business("owner@example.com", "joes-diner")
                .await?;
            let starters = test.catalog().insert_category(business.id, "Starters", 0).await?;
            let mains = test.catalog().insert_category(business.id, "Mains", 1).await?;
            let bread = test.catalog().insert_item(starters.id, "Bread", 3.0, 1).await?;
            let soup = test.catalog().insert_item(starters.id, "Soup", 8.0, 0).await?;
            test.catalog().insert_item(mains.id, "Steak", 29.0, 0).await?;

            let item_repository = ItemRepository::new(&test.db);
            let result = item_repository.list_by_categories(&[starters.id]).await?;

            let ids: Vec<i32> = result.iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![soup.id, bread.id]);

            Ok(())
        }
    }

    mod update {
        use menuboard_test_utils::prelude::*;

        use crate::server::data::item::{ItemFields, ItemRepository};

        /// Expect the item to move to the new category and keep its order
        #[tokio::test]
        async fn moves_item_between_categories() -> Result<(), TestError> {
            let test = TestBuilder::new().with_menu_tables().build().await?;
            let (_, business) = test
                .user()
                .insert_user_with_business("owner@example.com", "joes-diner")
                .await?;
            let starters = test.catalog().insert_category(business.id, "Starters", 0).await?;
            let mains = test.catalog().insert_category(business.id, "Mains", 1).await?;
            let soup = test.catalog().insert_item(starters.id, "Soup", 8.0, 3).await?;

            let item_repository = ItemRepository::new(&test.db);
            let updated = item_repository
                .update(
                    soup.id,
                    ItemFields {
                        category_id: mains.id,
                        name: "Fish soup".to_string(),
                        description: Some("With saffron".to_string()),
                        price: 12.0,
                    },
                )
                .await?
                .unwrap();

            assert_eq!(updated.category_id, mains.id);
            assert_eq!(updated.order, 3);
            assert_eq!(updated.price, 12.0);
            assert_eq!(item_repository.count_by_category(starters.id).await?, 0);

            Ok(())
        }
    }
}
