use super::{delete, get_json, post_json, put_json, ApiError};
use crate::model::catalog::{CatalogDto, CategoryDto, CategoryFormDto, ItemDto, ItemFormDto};

pub async fn get_catalog(business_id: i32) -> Result<CatalogDto, ApiError> {
    get_json(&format!("/api/businesses/{}/catalog", business_id)).await
}

pub async fn create_category(
    business_id: i32,
    payload: &CategoryFormDto,
) -> Result<CategoryDto, ApiError> {
    post_json(&format!("/api/businesses/{}/categories", business_id), payload).await
}

pub async fn update_category(
    business_id: i32,
    category_id: i32,
    payload: &CategoryFormDto,
) -> Result<CategoryDto, ApiError> {
    put_json(
        &format!("/api/businesses/{}/categories/{}", business_id, category_id),
        payload,
    )
    .await
}

pub async fn delete_category(business_id: i32, category_id: i32) -> Result<(), ApiError> {
    delete(&format!(
        "/api/businesses/{}/categories/{}",
        business_id, category_id
    ))
    .await
}

pub async fn create_item(business_id: i32, payload: &ItemFormDto) -> Result<ItemDto, ApiError> {
    post_json(&format!("/api/businesses/{}/items", business_id), payload).await
}

pub async fn update_item(
    business_id: i32,
    item_id: i32,
    payload: &ItemFormDto,
) -> Result<ItemDto, ApiError> {
    put_json(
        &format!("/api/businesses/{}/items/{}", business_id, item_id),
        payload,
    )
    .await
}

pub async fn delete_item(business_id: i32, item_id: i32) -> Result<(), ApiError> {
    delete(&format!("/api/businesses/{}/items/{}", business_id, item_id)).await
}
