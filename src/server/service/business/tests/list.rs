use super::*;

/// Expect owners to see only their own businesses
#[tokio::test]
async fn lists_only_owned_businesses() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (owner, owned) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    test.user()
        .insert_user_with_business("other@example.com", "other-bar")
        .await?;

    let business_service = BusinessService::new(&test.db);
    let result = business_service
        .list(&session_of(&owner, false))
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, owned.id);

    Ok(())
}

/// Expect admins to see every business
#[tokio::test]
async fn lists_all_businesses_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let admin = test.user().insert_user(TEST_ADMIN_EMAIL).await?;
    test.user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    test.user()
        .insert_user_with_business("other@example.com", "other-bar")
        .await?;

    let business_service = BusinessService::new(&test.db);
    let result = business_service
        .list(&session_of(&admin, true))
        .await
        .unwrap();

    assert_eq!(result.len(), 2);

    Ok(())
}
