use super::{get_json, ApiError};
use crate::model::menu::{PublicMenuDto, QrCodeDto};

pub async fn get_public_menu(alias: &str) -> Result<PublicMenuDto, ApiError> {
    get_json(&format!("/api/menu/{}", alias)).await
}

pub async fn get_qr_code(alias: &str) -> Result<QrCodeDto, ApiError> {
    get_json(&format!("/api/menu/{}/qrcode", alias)).await
}

/// Where the browser downloads the PNG rendition from.
pub fn qr_code_png_url(alias: &str) -> String {
    format!("/api/menu/{}/qrcode.png", alias)
}
