use super::{delete, get_json, post_json, put_json, ApiError};
use crate::model::{
    business::{BusinessDto, CreateBusinessDto, TransferBusinessDto, UpdateBusinessDto},
    user::UserDto,
};

pub async fn list_businesses() -> Result<Vec<BusinessDto>, ApiError> {
    get_json("/api/businesses").await
}

pub async fn create_business(payload: &CreateBusinessDto) -> Result<BusinessDto, ApiError> {
    post_json("/api/businesses", payload).await
}

pub async fn get_business(business_id: i32) -> Result<BusinessDto, ApiError> {
    get_json(&format!("/api/businesses/{}", business_id)).await
}

pub async fn update_business(
    business_id: i32,
    payload: &UpdateBusinessDto,
) -> Result<BusinessDto, ApiError> {
    put_json(&format!("/api/businesses/{}", business_id), payload).await
}

pub async fn delete_business(business_id: i32) -> Result<(), ApiError> {
    delete(&format!("/api/businesses/{}", business_id)).await
}

pub async fn get_business_owner(business_id: i32) -> Result<UserDto, ApiError> {
    get_json(&format!("/api/businesses/{}/owner", business_id)).await
}

pub async fn transfer_business(business_id: i32, user_id: i32) -> Result<BusinessDto, ApiError> {
    post_json(
        &format!("/api/businesses/{}/transfer", business_id),
        &TransferBusinessDto { user_id },
    )
    .await
}
