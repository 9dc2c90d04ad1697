use menuboard::{
    model::{
        business::{
            BusinessDto, BusinessType, CreateBusinessDto, Currency, TransferBusinessDto,
            UpdateBusinessDto,
        },
        user::UserDto,
    },
    server::controller::business::{
        create_business, delete_business, get_business, get_business_owner, list_businesses,
        transfer_business, update_business,
    },
};

use super::*;

#[tokio::test]
/// Expect 401 without touching the database when nobody is signed in
///
/// No tables exist, so any query would answer 500 instead.
async fn list_requires_session_before_database() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_businesses(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with only the signed in owner's businesses
async fn list_returns_own_businesses() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, _) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    test.user()
        .insert_user_with_business("other@example.com", "harbour-bar")
        .await?;
    sign_in_as(&test, owner.id).await;

    let result = list_businesses(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let businesses: Vec<BusinessDto> = body_json(resp).await;
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].alias, "joes-diner");

    Ok(())
}

#[tokio::test]
/// Expect 201 with the derived alias and defaults
async fn create_derives_alias() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let owner = test.user().insert_user("owner@example.com").await?;
    sign_in_as(&test, owner.id).await;

    let result = create_business(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CreateBusinessDto {
            name: "Joe's Diner".to_string(),
            business_type: BusinessType::Restaurant,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let business: BusinessDto = body_json(resp).await;
    assert_eq!(business.alias, "joes-diner");
    assert_eq!(business.currency, Currency::Eur);
    assert_eq!(business.address, "");
    assert_eq!(business.user_id, owner.id);

    Ok(())
}

#[tokio::test]
/// Expect 409 when another business already has the derived alias
async fn create_conflicts_on_taken_alias() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    test.user()
        .insert_user_with_business("other@example.com", "joes-diner")
        .await?;
    let owner = test.user().insert_user("owner@example.com").await?;
    sign_in_as(&test, owner.id).await;

    let result = create_business(
        State(test.into_app_state()),
        test.session.clone(),
        Json(CreateBusinessDto {
            name: "Joe's Diner".to_string(),
            business_type: BusinessType::Bar,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 for another owner's business
async fn get_hides_foreign_business() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (_, business) = test
        .user()
        .insert_user_with_business("other@example.com", "harbour-bar")
        .await?;
    let owner = test.user().insert_user("owner@example.com").await?;
    sign_in_as(&test, owner.id).await;

    let result = get_business(
        State(test.into_app_state()),
        test.session.clone(),
        Path(business.id),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the saved settings
async fn update_saves_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    sign_in_as(&test, owner.id).await;

    let result = update_business(
        State(test.into_app_state()),
        test.session.clone(),
        Path(business.id),
        Json(UpdateBusinessDto {
            name: "Joe's Bar".to_string(),
            alias: "joes-bar".to_string(),
            address: "2 Harbour Street".to_string(),
            phone: Some(" ".to_string()),
            email: Some("hello@joes.example".to_string()),
            currency: Currency::Nok,
            business_type: BusinessType::Bar,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let saved: BusinessDto = body_json(resp).await;
    assert_eq!(saved.alias, "joes-bar");
    assert_eq!(saved.currency, Currency::Nok);
    assert_eq!(saved.phone, None);

    Ok(())
}

#[tokio::test]
/// Expect 204 and the business gone afterwards
async fn delete_removes_business() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    sign_in_as(&test, owner.id).await;
    let state = test.into_app_state();

    let result = delete_business(State(state.clone()), test.session.clone(), Path(business.id)).await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let result = get_business(State(state), test.session.clone(), Path(business.id)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 403 when an owner asks for the owner of their own business
async fn owner_requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    sign_in_as(&test, owner.id).await;

    let result = get_business_owner(
        State(test.into_app_state()),
        test.session.clone(),
        Path(business.id),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect an admin to move a business to another account
async fn admin_transfers_business() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .with_admin()
        .build()
        .await?;
    let (_, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let buyer = test.user().insert_user("buyer@example.com").await?;
    let admin = test.user().insert_user(TEST_ADMIN_EMAIL).await?;
    sign_in_as(&test, admin.id).await;
    let state = test.into_app_state();

    let result = transfer_business(
        State(state.clone()),
        test.session.clone(),
        Path(business.id),
        Json(TransferBusinessDto { user_id: buyer.id }),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_business_owner(State(state), test.session.clone(), Path(business.id)).await;
    let resp = result.unwrap().into_response();
    let owner: UserDto = body_json(resp).await;
    assert_eq!(owner.id, buyer.id);

    Ok(())
}
