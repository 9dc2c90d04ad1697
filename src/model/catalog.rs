use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CategoryDto {
    pub id: i32,
    pub business_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ItemDto {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A business's categories and the items filed under them, both sorted by `order` then `id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CatalogDto {
    pub categories: Vec<CategoryDto>,
    pub items: Vec<ItemDto>,
}

impl CatalogDto {
    /// Items of one category, in display order.
    pub fn items_in(&self, category_id: i32) -> impl Iterator<Item = &ItemDto> {
        self.items
            .iter()
            .filter(move |item| item.category_id == category_id)
    }

    /// Items can only be filed under an existing category.
    pub fn can_add_item(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Categories holding at least one item; empty categories get no block on the public menu.
    pub fn visible_categories(&self) -> impl Iterator<Item = &CategoryDto> {
        self.categories
            .iter()
            .filter(|category| self.items_in(category.id).next().is_some())
    }

    /// Category highlighted when the public menu first opens.
    pub fn first_category_id(&self) -> Option<i32> {
        self.categories.first().map(|category| category.id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.items.is_empty()
    }
}

/// Create and update body for a category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CategoryFormDto {
    pub name: String,
    pub description: Option<String>,
}

/// Create and update body for an item, `category_id` may move the item to another category
/// of the same business.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ItemFormDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Parses a price typed into a form field.
///
/// Accepts a comma as decimal separator. Rejects empty, negative, and non-finite input.
pub fn parse_price(input: &str) -> Result<f64, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Price is required");
    }

    let price: f64 = input
        .replace(',', ".")
        .parse()
        .map_err(|_| "Price must be a number")?;

    if !price.is_finite() {
        return Err("Price must be a number");
    }
    if price < 0.0 {
        return Err("Price cannot be negative");
    }

    Ok(price)
}

/// Trims an optional text field, mapping blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn category(id: i32, order: i32) -> CategoryDto {
        CategoryDto {
            id,
            business_id: 1,
            name: format!("Category {id}"),
            description: None,
            order,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn item(id: i32, category_id: i32) -> ItemDto {
        ItemDto {
            id,
            category_id,
            name: format!("Item {id}"),
            description: None,
            price: 10.0,
            order: 0,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_catalog_blocks_adding_items() {
        let catalog = CatalogDto::default();

        assert!(!catalog.can_add_item());
        assert_eq!(catalog.visible_categories().count(), 0);
    }

    #[test]
    fn hides_categories_without_items() {
        let catalog = CatalogDto {
            categories: vec![category(1, 0), category(2, 1), category(3, 2)],
            items: vec![item(10, 1), item(11, 3), item(12, 3)],
        };

        let visible: Vec<i32> = catalog.visible_categories().map(|c| c.id).collect();
        assert_eq!(visible, vec![1, 3]);
        assert_eq!(catalog.items_in(3).count(), 2);
        assert!(catalog.can_add_item());
    }

    #[test]
    fn first_category_starts_active_even_without_items() {
        let catalog = CatalogDto {
            categories: vec![category(4, 0), category(2, 1)],
            items: vec![item(10, 2)],
        };

        assert_eq!(catalog.first_category_id(), Some(4));
        assert_eq!(CatalogDto::default().first_category_id(), None);
    }

    #[test]
    fn parses_prices() {
        assert_eq!(parse_price("12.5"), Ok(12.5));
        assert_eq!(parse_price(" 7,25 "), Ok(7.25));
        assert_eq!(parse_price("0"), Ok(0.0));
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("-1").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn blank_text_becomes_none() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" Spicy ".to_string())), Some("Spicy".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
