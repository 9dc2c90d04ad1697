use menuboard::{
    model::catalog::{CatalogDto, CategoryDto, CategoryFormDto, ItemFormDto},
    server::controller::catalog::{
        create_category, create_item, delete_category, get_catalog, update_item,
    },
};

use super::*;

fn category_form(name: &str) -> CategoryFormDto {
    CategoryFormDto {
        name: name.to_string(),
        description: None,
    }
}

fn item_form(category_id: i32, name: &str, price: f64) -> ItemFormDto {
    ItemFormDto {
        category_id,
        name: name.to_string(),
        description: None,
        price,
    }
}

#[tokio::test]
/// Expect a new category to get the current count as its order
async fn create_category_appends_by_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    test.catalog().insert_category(business.id, "Starters", 0).await?;
    test.catalog().insert_category(business.id, "Mains", 2).await?;
    sign_in_as(&test, owner.id).await;

    let result = create_category(
        State(test.into_app_state()),
        test.session.clone(),
        Path(business.id),
        Json(category_form("Desserts")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let category: CategoryDto = body_json(resp).await;
    assert_eq!(category.order, 2);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the item's category does not exist
async fn create_item_without_category_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    sign_in_as(&test, owner.id).await;

    let result = create_item(
        State(test.into_app_state()),
        test.session.clone(),
        Path(business.id),
        Json(item_form(1, "Fish soup", 12.5)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a negative price
async fn create_item_rejects_negative_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let category = test
        .catalog()
        .insert_category(business.id, "Starters", 0)
        .await?;
    sign_in_as(&test, owner.id).await;

    let result = create_item(
        State(test.into_app_state()),
        test.session.clone(),
        Path(business.id),
        Json(item_form(category.id, "Fish soup", -1.0)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect deleting a category to remove exactly its items from the catalog
async fn delete_category_removes_its_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let starters = test
        .catalog()
        .insert_category(business.id, "Starters", 0)
        .await?;
    let mains = test.catalog().insert_category(business.id, "Mains", 1).await?;
    test.catalog()
        .insert_item(starters.id, "Fish soup", 12.5, 0)
        .await?;
    let steak = test.catalog().insert_item(mains.id, "Steak", 29.0, 0).await?;
    sign_in_as(&test, owner.id).await;
    let state = test.into_app_state();

    let result = delete_category(
        State(state.clone()),
        test.session.clone(),
        Path((business.id, starters.id)),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let result = get_catalog(State(state), test.session.clone(), Path(business.id)).await;
    let catalog: CatalogDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(catalog.categories.len(), 1);
    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.items[0].id, steak.id);

    Ok(())
}

#[tokio::test]
/// Expect 404 when moving an item into another business's category
async fn update_item_cannot_leave_business() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let (_, other_business) = test
        .user()
        .insert_user_with_business("other@example.com", "harbour-bar")
        .await?;
    let starters = test
        .catalog()
        .insert_category(business.id, "Starters", 0)
        .await?;
    let foreign = test
        .catalog()
        .insert_category(other_business.id, "Drinks", 0)
        .await?;
    let soup = test
        .catalog()
        .insert_item(starters.id, "Fish soup", 12.5, 0)
        .await?;
    sign_in_as(&test, owner.id).await;

    let result = update_item(
        State(test.into_app_state()),
        test.session.clone(),
        Path((business.id, soup.id)),
        Json(item_form(foreign.id, "Fish soup", 12.5)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 401 for catalog access without a session, before any query
async fn catalog_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_catalog(State(test.into_app_state()), test.session.clone(), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
