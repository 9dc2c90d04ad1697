use super::*;

/// Expect the item's order to be the count of items already in its category
#[tokio::test]
async fn appends_with_count_in_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let starters = test.catalog().insert_category(business.id, "Starters", 0).await?;
    let mains = test.catalog().insert_category(business.id, "Mains", 1).await?;
    test.catalog().insert_item(starters.id, "Soup", 8.0, 0).await?;
    test.catalog().insert_item(starters.id, "Bread", 3.0, 1).await?;
    test.catalog().insert_item(mains.id, "Steak", 29.0, 0).await?;

    let catalog_service = CatalogService::new(&test.db);
    let created = catalog_service
        .create_item(
            &owner_session(&owner),
            business.id,
            &item_form(starters.id, "Olives", 4.5),
        )
        .await
        .unwrap();

    assert_eq!(created.order, 2);
    assert_eq!(created.price, 4.5);

    Ok(())
}

/// Expect negative, non-finite, and unnamed items to be rejected
#[tokio::test]
async fn rejects_invalid_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let starters = test.catalog().insert_category(business.id, "Starters", 0).await?;

    let catalog_service = CatalogService::new(&test.db);
    let user = owner_session(&owner);
    for form in [
        item_form(starters.id, "Soup", -1.0),
        item_form(starters.id, "Soup", f64::NAN),
        item_form(starters.id, " ", 5.0),
    ] {
        let result = catalog_service.create_item(&user, business.id, &form).await;

        assert!(matches!(
            result,
            Err(Error::MenuError(MenuError::Validation(_)))
        ));
    }

    Ok(())
}

/// Expect not found when filing an item under another business's category
#[tokio::test]
async fn refuses_foreign_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let (_, other) = test
        .user()
        .insert_user_with_business("other@example.com", "other-bar")
        .await?;
    let foreign = test.catalog().insert_category(other.id, "Cocktails", 0).await?;

    let catalog_service = CatalogService::new(&test.db);
    let result = catalog_service
        .create_item(
            &owner_session(&owner),
            business.id,
            &item_form(foreign.id, "Negroni", 12.0),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::MenuError(MenuError::CategoryNotFound))
    ));

    Ok(())
}

/// Expect an item to move to another category of the same business
#[tokio::test]
async fn moves_item_within_business() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let starters = test.catalog().insert_category(business.id, "Starters", 0).await?;
    let mains = test.catalog().insert_category(business.id, "Mains", 1).await?;
    let soup = test.catalog().insert_item(starters.id, "Soup", 8.0, 0).await?;

    let catalog_service = CatalogService::new(&test.db);
    let user = owner_session(&owner);
    let updated = catalog_service
        .update_item(&user, business.id, soup.id, &item_form(mains.id, "Soup", 9.5))
        .await
        .unwrap();

    assert_eq!(updated.category_id, mains.id);
    assert_eq!(updated.price, 9.5);
    let catalog = catalog_service.catalog(&user, business.id).await.unwrap();
    assert_eq!(catalog.items_in(starters.id).count(), 0);
    assert_eq!(catalog.items_in(mains.id).count(), 1);

    Ok(())
}

/// Expect not found when the item belongs to another business
#[tokio::test]
async fn refuses_foreign_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let (_, other) = test
        .user()
        .insert_user_with_business("other@example.com", "other-bar")
        .await?;
    let cocktails = test.catalog().insert_category(other.id, "Cocktails", 0).await?;
    let negroni = test.catalog().insert_item(cocktails.id, "Negroni", 12.0, 0).await?;

    let catalog_service = CatalogService::new(&test.db);
    let result = catalog_service
        .delete_item(&owner_session(&owner), business.id, negroni.id)
        .await;

    assert!(matches!(result, Err(Error::MenuError(MenuError::ItemNotFound))));

    Ok(())
}
