use axum::{body::to_bytes, http::header};
use menuboard::{
    model::menu::{PublicMenuDto, QrCodeDto},
    server::controller::menu::{download_qr_code, get_public_menu, get_qr_code},
};

use super::*;

#[tokio::test]
/// Expect the business with its catalog, no session needed
async fn public_menu_by_alias() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let (_, business) = test
        .user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;
    let starters = test
        .catalog()
        .insert_category(business.id, "Starters", 0)
        .await?;
    test.catalog()
        .insert_item(starters.id, "Fish soup", 12.5, 0)
        .await?;

    let result = get_public_menu(
        State(test.into_app_state()),
        Path("joes-diner".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let menu: PublicMenuDto = body_json(resp).await;
    assert_eq!(menu.business.alias, "joes-diner");
    assert_eq!(menu.catalog.categories.len(), 1);
    assert_eq!(menu.catalog.items.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 404 for an alias no business has
async fn public_menu_unknown_alias() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;

    let result = get_public_menu(
        State(test.into_app_state()),
        Path("nowhere".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the QR code to encode the public menu URL
async fn qr_code_encodes_menu_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    test.user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;

    let result = get_qr_code(
        State(test.into_app_state()),
        Path("joes-diner".to_string()),
    )
    .await;

    let qr_code: QrCodeDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(
        qr_code.menu_url,
        format!("{}/business/joes-diner", TEST_PUBLIC_URL)
    );
    assert!(qr_code.svg.contains("<svg"));

    Ok(())
}

#[tokio::test]
/// Expect a PNG attachment named after the business
async fn qr_code_png_download() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    test.user()
        .insert_user_with_business("owner@example.com", "joes-diner")
        .await?;

    let result = download_qr_code(
        State(test.into_app_state()),
        Path("joes-diner".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"joes-diner-qr-code.png\"; filename*=UTF-8''joes-diner-qr-code.png"
    );

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

    Ok(())
}

#[tokio::test]
/// Expect a non-ASCII business name to survive in the UTF-8 filename parameter
async fn qr_code_png_download_keeps_utf8_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_menu_tables().build().await?;
    let user_model = test.user().insert_user("owner@example.com").await?;
    test.business()
        .insert_business(user_model.id, "Café Ørn", "cafe-orn")
        .await?;

    let result = download_qr_code(State(test.into_app_state()), Path("cafe-orn".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Caf_ _rn-qr-code.png\"; filename*=UTF-8''Caf%C3%A9%20%C3%98rn-qr-code.png"
    );

    Ok(())
}
