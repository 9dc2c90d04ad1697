use serde::{Deserialize, Serialize};

use super::{
    business::{BusinessType, Currency},
    catalog::CatalogDto,
};

/// What the public menu page needs to know about a business, contact details included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PublicBusinessDto {
    pub name: String,
    pub alias: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency: Currency,
    pub business_type: BusinessType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PublicMenuDto {
    pub business: PublicBusinessDto,
    pub catalog: CatalogDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QrCodeDto {
    /// Absolute URL of the public menu encoded in the code
    pub menu_url: String,
    /// The code rendered as an SVG document
    pub svg: String,
}

/// Public URL of a business menu, `origin` without trailing slash.
pub fn menu_url(origin: &str, alias: &str) -> String {
    format!("{}/business/{}", origin.trim_end_matches('/'), alias)
}

/// Download name of the QR code image, falls back to `menu` for an unnamed business.
pub fn qr_filename(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { "menu" } else { name };
    format!("{name}-qr-code.png")
}
