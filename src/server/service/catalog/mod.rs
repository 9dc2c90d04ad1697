//! Categories and items of a business's catalog.
//!
//! New categories and items are appended: their `order` is the number of siblings at the
//! time of creation. Orders are never renumbered, so deletions can leave gaps and equal
//! orders are possible; reads sort by `order` then ID.

#[cfg(test)]
mod tests;

use sea_orm::ConnectionTrait;

use crate::{
    model::{
        catalog::{non_blank, CatalogDto, CategoryDto, CategoryFormDto, ItemDto, ItemFormDto},
        user::SessionDto,
    },
    server::{
        data::{
            category::CategoryRepository,
            item::{ItemFields, ItemRepository},
        },
        error::{menu::MenuError, Error},
        model::db::{CategoryModel, ItemModel},
        service::business::accessible_business,
    },
};

pub(crate) fn category_dto(category: CategoryModel) -> CategoryDto {
    CategoryDto {
        id: category.id,
        business_id: category.business_id,
        name: category.name,
        description: category.description,
        order: category.order,
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

pub(crate) fn item_dto(item: ItemModel) -> ItemDto {
    ItemDto {
        id: item.id,
        category_id: item.category_id,
        name: item.name,
        description: item.description,
        price: item.price,
        order: item.order,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

/// Reads the catalog of a business: its categories, then the items of those categories.
pub(crate) async fn load_catalog<C: ConnectionTrait>(
    db: &C,
    business_id: i32,
) -> Result<CatalogDto, Error> {
    let categories = CategoryRepository::new(db)
        .list_by_business(business_id)
        .await?;
    let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    let items = ItemRepository::new(db)
        .list_by_categories(&category_ids)
        .await?;

    Ok(CatalogDto {
        categories: categories.into_iter().map(category_dto).collect(),
        items: items.into_iter().map(item_dto).collect(),
    })
}

fn order_from_count(count: u64) -> Result<i32, Error> {
    i32::try_from(count).map_err(|_| MenuError::validation("Too many entries to add another").into())
}

fn validate_category(payload: &CategoryFormDto) -> Result<(String, Option<String>), Error> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(MenuError::validation("Category name is required").into());
    }

    Ok((name.to_string(), non_blank(payload.description.clone())))
}

fn validate_item(payload: &ItemFormDto) -> Result<ItemFields, Error> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(MenuError::validation("Item name is required").into());
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(MenuError::validation("Price must be a non-negative number").into());
    }

    Ok(ItemFields {
        category_id: payload.category_id,
        name: name.to_string(),
        description: non_blank(payload.description.clone()),
        price: payload.price,
    })
}

pub struct CatalogService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// The full catalog of a business the user may manage.
    pub async fn catalog(&self, user: &SessionDto, business_id: i32) -> Result<CatalogDto, Error> {
        accessible_business(self.db, user, business_id).await?;

        load_catalog(self.db, business_id).await
    }

    /// Loads a category, requiring it to belong to `business_id`.
    async fn category_of(
        &self,
        business_id: i32,
        category_id: i32,
    ) -> Result<CategoryModel, Error> {
        CategoryRepository::new(self.db)
            .get(category_id)
            .await?
            .filter(|category| category.business_id == business_id)
            .ok_or_else(|| MenuError::CategoryNotFound.into())
    }

    /// Loads an item, requiring its category to belong to `business_id`.
    async fn item_of(&self, business_id: i32, item_id: i32) -> Result<ItemModel, Error> {
        let item = ItemRepository::new(self.db)
            .get(item_id)
            .await?
            .ok_or(MenuError::ItemNotFound)?;

        match self.category_of(business_id, item.category_id).await {
            Ok(_) => Ok(item),
            Err(Error::MenuError(MenuError::CategoryNotFound)) => {
                Err(MenuError::ItemNotFound.into())
            }
            Err(err) => Err(err),
        }
    }

    /// Appends a category to the business.
    pub async fn create_category(
        &self,
        user: &SessionDto,
        business_id: i32,
        payload: &CategoryFormDto,
    ) -> Result<CategoryDto, Error> {
        accessible_business(self.db, user, business_id).await?;
        let (name, description) = validate_category(payload)?;

        let category_repository = CategoryRepository::new(self.db);
        let order = order_from_count(category_repository.count_by_business(business_id).await?)?;
        let category = category_repository
            .create(business_id, &name, description, order)
            .await?;

        Ok(category_dto(category))
    }

    /// Renames or redescribes a category, its order is kept.
    pub async fn update_category(
        &self,
        user: &SessionDto,
        business_id: i32,
        category_id: i32,
        payload: &CategoryFormDto,
    ) -> Result<CategoryDto, Error> {
        accessible_business(self.db, user, business_id).await?;
        self.category_of(business_id, category_id).await?;
        let (name, description) = validate_category(payload)?;

        let category = CategoryRepository::new(self.db)
            .update(category_id, &name, description)
            .await?
            .ok_or(MenuError::CategoryNotFound)?;

        Ok(category_dto(category))
    }

    /// Deletes a category, the storage cascade removes its items.
    pub async fn delete_category(
        &self,
        user: &SessionDto,
        business_id: i32,
        category_id: i32,
    ) -> Result<(), Error> {
        accessible_business(self.db, user, business_id).await?;
        self.category_of(business_id, category_id).await?;

        CategoryRepository::new(self.db).delete(category_id).await?;

        Ok(())
    }

    /// Appends an item to one of the business's categories.
    pub async fn create_item(
        &self,
        user: &SessionDto,
        business_id: i32,
        payload: &ItemFormDto,
    ) -> Result<ItemDto, Error> {
        accessible_business(self.db, user, business_id).await?;
        let fields = validate_item(payload)?;
        self.category_of(business_id, fields.category_id).await?;

        let item_repository = ItemRepository::new(self.db);
        let order = order_from_count(item_repository.count_by_category(fields.category_id).await?)?;
        let item = item_repository.create(fields, order).await?;

        Ok(item_dto(item))
    }

    /// Updates an item, possibly moving it to another category of the same business.
    pub async fn update_item(
        &self,
        user: &SessionDto,
        business_id: i32,
        item_id: i32,
        payload: &ItemFormDto,
    ) -> Result<ItemDto, Error> {
        accessible_business(self.db, user, business_id).await?;
        self.item_of(business_id, item_id).await?;
        let fields = validate_item(payload)?;
        self.category_of(business_id, fields.category_id).await?;

        let item = ItemRepository::new(self.db)
            .update(item_id, fields)
            .await?
            .ok_or(MenuError::ItemNotFound)?;

        Ok(item_dto(item))
    }

    pub async fn delete_item(
        &self,
        user: &SessionDto,
        business_id: i32,
        item_id: i32,
    ) -> Result<(), Error> {
        accessible_business(self.db, user, business_id).await?;
        self.item_of(business_id, item_id).await?;

        ItemRepository::new(self.db).delete(item_id).await?;

        Ok(())
    }
}
