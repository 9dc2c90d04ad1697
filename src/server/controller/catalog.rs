use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogDto, CategoryDto, CategoryFormDto, ItemDto, ItemFormDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// Categories and items of a business, both in display order
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/catalog",
    tag = CATALOG_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "The catalog", body = CatalogDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let catalog = CatalogService::new(&state.db)
        .catalog(&user, business_id)
        .await?;

    Ok((StatusCode::OK, Json(catalog)))
}

#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/categories",
    tag = CATALOG_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    request_body = CategoryFormDto,
    responses(
        (status = 201, description = "Category appended", body = CategoryDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
    Json(payload): Json<CategoryFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let category = CatalogService::new(&state.db)
        .create_category(&user, business_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/categories/{category_id}",
    tag = CATALOG_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryFormDto,
    responses(
        (status = 200, description = "Saved category", body = CategoryDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path((business_id, category_id)): Path<(i32, i32)>,
    Json(payload): Json<CategoryFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let category = CatalogService::new(&state.db)
        .update_category(&user, business_id, category_id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Delete a category together with its items
#[utoipa::path(
    delete,
    path = "/api/businesses/{business_id}/categories/{category_id}",
    tag = CATALOG_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path((business_id, category_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    CatalogService::new(&state.db)
        .delete_category(&user, business_id, category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/items",
    tag = CATALOG_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    request_body = ItemFormDto,
    responses(
        (status = 201, description = "Item appended to its category", body = ItemDto),
        (status = 400, description = "Blank name or invalid price", body = ErrorDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
    Json(payload): Json<ItemFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let item = CatalogService::new(&state.db)
        .create_item(&user, business_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/items/{item_id}",
    tag = CATALOG_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemFormDto,
    responses(
        (status = 200, description = "Saved item", body = ItemDto),
        (status = 400, description = "Blank name or invalid price", body = ErrorDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business, category, or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path((business_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<ItemFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let item = CatalogService::new(&state.db)
        .update_item(&user, business_id, item_id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/businesses/{business_id}/items/{item_id}",
    tag = CATALOG_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path((business_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    CatalogService::new(&state.db)
        .delete_item(&user, business_id, item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
