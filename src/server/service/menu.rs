use sea_orm::ConnectionTrait;

use crate::{
    model::{
        business::{BusinessType, Currency},
        menu::{menu_url, qr_filename, PublicBusinessDto, PublicMenuDto, QrCodeDto},
    },
    server::{
        data::business::BusinessRepository,
        error::{menu::MenuError, Error},
        model::db::BusinessModel,
        service::{catalog::load_catalog, qr},
    },
};

/// A rendered QR code image ready for download.
pub struct QrCodePng {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Read-only access to published menus, no session required.
pub struct MenuService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn business_by_alias(&self, alias: &str) -> Result<BusinessModel, Error> {
        BusinessRepository::new(self.db)
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| MenuError::MenuNotFound.into())
    }

    /// The public menu of the business with exactly this alias.
    pub async fn public_menu(&self, alias: &str) -> Result<PublicMenuDto, Error> {
        let business = self.business_by_alias(alias).await?;
        let catalog = load_catalog(self.db, business.id).await?;

        Ok(PublicMenuDto {
            business: PublicBusinessDto {
                currency: Currency::from_code(&business.currency_code).unwrap_or_default(),
                business_type: BusinessType::from_id(&business.business_type)
                    .unwrap_or_default(),
                name: business.name,
                alias: business.alias,
                address: business.address,
                phone: business.phone,
                email: business.email,
            },
            catalog,
        })
    }

    /// The menu link of a business and its QR code as SVG.
    pub async fn qr_code(&self, alias: &str, public_url: &str) -> Result<QrCodeDto, Error> {
        let business = self.business_by_alias(alias).await?;
        let menu_url = menu_url(public_url, &business.alias);
        let svg = qr::render_svg(&menu_url)?;

        Ok(QrCodeDto { menu_url, svg })
    }

    /// The QR code as a PNG named after the business.
    pub async fn qr_code_png(&self, alias: &str, public_url: &str) -> Result<QrCodePng, Error> {
        let business = self.business_by_alias(alias).await?;
        let bytes = qr::render_png(&menu_url(public_url, &business.alias))?;

        Ok(QrCodePng {
            filename: qr_filename(&business.name),
            bytes,
        })
    }
}
