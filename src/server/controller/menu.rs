use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu::{PublicMenuDto, QrCodeDto},
    },
    server::{error::Error, model::app::AppState, service::menu::MenuService},
};

pub static MENU_TAG: &str = "menu";

/// Published menu of a business, no sign in required
#[utoipa::path(
    get,
    path = "/api/menu/{alias}",
    tag = MENU_TAG,
    params(("alias" = String, Path, description = "Business alias")),
    responses(
        (status = 200, description = "Business details with its catalog", body = PublicMenuDto),
        (status = 404, description = "No business has this alias", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_menu(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let menu = MenuService::new(&state.db).public_menu(&alias).await?;

    Ok((StatusCode::OK, Json(menu)))
}

/// Menu link of a business with its QR code as SVG
#[utoipa::path(
    get,
    path = "/api/menu/{alias}/qrcode",
    tag = MENU_TAG,
    params(("alias" = String, Path, description = "Business alias")),
    responses(
        (status = 200, description = "Menu URL and QR code", body = QrCodeDto),
        (status = 404, description = "No business has this alias", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qr_code(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let qr_code = MenuService::new(&state.db)
        .qr_code(&alias, &state.public_url)
        .await?;

    Ok((StatusCode::OK, Json(qr_code)))
}

/// QR code as a PNG download named after the business
#[utoipa::path(
    get,
    path = "/api/menu/{alias}/qrcode.png",
    tag = MENU_TAG,
    params(("alias" = String, Path, description = "Business alias")),
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 404, description = "No business has this alias", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_qr_code(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let png = MenuService::new(&state.db)
        .qr_code_png(&alias, &state.public_url)
        .await?;

    let disposition = attachment_disposition(&png.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        png.bytes,
    ))
}

/// `Content-Disposition` carrying an ASCII fallback name plus the exact UTF-8 name (RFC 6266/5987).
fn attachment_disposition(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        header_safe_filename(filename),
        urlencoding::encode(filename)
    )
}

/// Keeps printable ASCII other than quotes and backslashes so the name fits a quoted header value.
fn header_safe_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}
