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
        business::{BusinessDto, CreateBusinessDto, TransferBusinessDto, UpdateBusinessDto},
        user::UserDto,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::business::BusinessService,
    },
};

pub static BUSINESS_TAG: &str = "business";

/// Businesses of the signed in user, every business for admins
#[utoipa::path(
    get,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    responses(
        (status = 200, description = "Businesses, newest first", body = Vec<BusinessDto>),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_businesses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let businesses = BusinessService::new(&state.db).list(&user).await?;

    Ok((StatusCode::OK, Json(businesses)))
}

/// Create a business owned by the signed in user
#[utoipa::path(
    post,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Business created", body = BusinessDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 409, description = "Derived alias already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBusinessDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let business = BusinessService::new(&state.db)
        .create(&user, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(business)))
}

#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "The business", body = BusinessDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let business = BusinessService::new(&state.db)
        .get(&user, business_id)
        .await?;

    Ok((StatusCode::OK, Json(business)))
}

/// Save business settings
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Saved business", body = BusinessDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 409, description = "Alias already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_business(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
    Json(payload): Json<UpdateBusinessDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let business = BusinessService::new(&state.db)
        .update(&user, business_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(business)))
}

/// Delete a business with all of its categories and items
#[utoipa::path(
    delete,
    path = "/api/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    responses(
        (status = 204, description = "Business deleted"),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_business(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    BusinessService::new(&state.db)
        .delete(&user, business_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Current owner of a business, admin only
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/owner",
    tag = BUSINESS_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "The owner account", body = UserDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Business or owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business_owner(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let owner = BusinessService::new(&state.db)
        .owner(&user, business_id)
        .await?;

    Ok((StatusCode::OK, Json(owner)))
}

/// Hand a business over to another account, admin only
#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/transfer",
    tag = BUSINESS_TAG,
    params(("business_id" = i32, Path, description = "Business ID")),
    request_body = TransferBusinessDto,
    responses(
        (status = 200, description = "Business with its new owner", body = BusinessDto),
        (status = 401, description = "Nobody is signed in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Business or target user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_business(
    State(state): State<AppState>,
    session: Session,
    Path(business_id): Path<i32>,
    Json(payload): Json<TransferBusinessDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let business = BusinessService::new(&state.db)
        .transfer(&user, business_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(business)))
}
