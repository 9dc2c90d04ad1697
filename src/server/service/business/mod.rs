//! Business management.
//!
//! Owners see and edit their own businesses, admins see and edit all of them and may hand a
//! business over to another account. A business the caller may not see is reported as not
//! found rather than forbidden.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::{
        alias::{derive_alias, is_valid_alias},
        business::{
            BusinessDto, BusinessType, CreateBusinessDto, Currency, UpdateBusinessDto,
        },
        catalog::non_blank,
        user::{is_valid_email, SessionDto, UserDto},
    },
    server::{
        data::{
            business::{BusinessRepository, BusinessSettings},
            is_unique_violation,
            user::UserRepository,
        },
        error::{menu::MenuError, Error},
        model::{admin::require_admin, db::BusinessModel},
    },
};

/// Maps a stored business row to its DTO.
pub(crate) fn business_dto(business: BusinessModel) -> BusinessDto {
    BusinessDto {
        currency: Currency::from_code(&business.currency_code).unwrap_or_default(),
        business_type: BusinessType::from_id(&business.business_type).unwrap_or_default(),
        id: business.id,
        user_id: business.user_id,
        name: business.name,
        address: business.address,
        phone: business.phone,
        email: business.email,
        alias: business.alias,
        created_at: business.created_at,
        updated_at: business.updated_at,
    }
}

/// Loads a business the user owns, or any business for admins.
pub(crate) async fn accessible_business<C: ConnectionTrait>(
    db: &C,
    user: &SessionDto,
    business_id: i32,
) -> Result<BusinessModel, Error> {
    match BusinessRepository::new(db).get(business_id).await? {
        Some(business) if user.is_admin || business.user_id == user.user_id => Ok(business),
        Some(_) => {
            tracing::debug!(
                user_id = %user.user_id,
                business_id = %business_id,
                "User attempted to access a business they do not own"
            );

            Err(MenuError::BusinessNotFound.into())
        }
        None => Err(MenuError::BusinessNotFound.into()),
    }
}

pub struct BusinessService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Businesses visible to the user, newest first.
    pub async fn list(&self, user: &SessionDto) -> Result<Vec<BusinessDto>, Error> {
        let owner_id = (!user.is_admin).then_some(user.user_id);
        let businesses = BusinessRepository::new(self.db).list(owner_id).await?;

        Ok(businesses.into_iter().map(business_dto).collect())
    }

    /// Creates a business owned by the user, the alias is derived from the name.
    ///
    /// # Returns
    /// - `Ok(BusinessDto)` - The new business
    /// - `Err(Error::MenuError(MenuError::Validation))` - Blank name or a name without any
    ///   letter or digit to build an alias from
    /// - `Err(Error::MenuError(MenuError::AliasTaken))` - Another business has the derived alias
    pub async fn create(
        &self,
        user: &SessionDto,
        payload: &CreateBusinessDto,
    ) -> Result<BusinessDto, Error> {
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(MenuError::validation("Business name is required").into());
        }

        let alias = derive_alias(name);
        if !is_valid_alias(&alias) {
            return Err(MenuError::validation(
                "Business name must contain at least one letter or number",
            )
            .into());
        }

        match BusinessRepository::new(self.db)
            .create(user.user_id, name, &alias, payload.business_type)
            .await
        {
            Ok(business) => Ok(business_dto(business)),
            Err(err) if is_unique_violation(&err) => Err(MenuError::AliasTaken.into()),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get(&self, user: &SessionDto, business_id: i32) -> Result<BusinessDto, Error> {
        let business = accessible_business(self.db, user, business_id).await?;

        Ok(business_dto(business))
    }

    /// Saves the settings form.
    ///
    /// Text fields are trimmed, blank phone and email become `None`.
    pub async fn update(
        &self,
        user: &SessionDto,
        business_id: i32,
        payload: UpdateBusinessDto,
    ) -> Result<BusinessDto, Error> {
        accessible_business(self.db, user, business_id).await?;

        let settings = validate_settings(payload)?;

        match BusinessRepository::new(self.db)
            .update(business_id, settings)
            .await
        {
            Ok(Some(business)) => Ok(business_dto(business)),
            Ok(None) => Err(MenuError::BusinessNotFound.into()),
            Err(err) if is_unique_violation(&err) => Err(MenuError::AliasInUse.into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a business along with its whole catalog.
    pub async fn delete(&self, user: &SessionDto, business_id: i32) -> Result<(), Error> {
        accessible_business(self.db, user, business_id).await?;

        let result = BusinessRepository::new(self.db).delete(business_id).await?;
        if result.rows_affected == 0 {
            return Err(MenuError::BusinessNotFound.into());
        }

        Ok(())
    }

    /// The owner's public projection, admin only.
    pub async fn owner(&self, user: &SessionDto, business_id: i32) -> Result<UserDto, Error> {
        require_admin(user)?;
        let business = accessible_business(self.db, user, business_id).await?;

        let owner = UserRepository::new(self.db)
            .get(business.user_id)
            .await?
            .ok_or(MenuError::UserNotFound)?;

        Ok(UserDto {
            id: owner.id,
            email: owner.email,
        })
    }

    /// Hands a business over to another account, admin only.
    pub async fn transfer(
        &self,
        user: &SessionDto,
        business_id: i32,
        new_owner_id: i32,
    ) -> Result<BusinessDto, Error> {
        require_admin(user)?;
        accessible_business(self.db, user, business_id).await?;

        if UserRepository::new(self.db)
            .get(new_owner_id)
            .await?
            .is_none()
        {
            return Err(MenuError::UserNotFound.into());
        }

        let business = BusinessRepository::new(self.db)
            .set_owner(business_id, new_owner_id)
            .await?
            .ok_or(MenuError::BusinessNotFound)?;

        tracing::info!(
            admin_id = %user.user_id,
            business_id = %business_id,
            new_owner_id = %new_owner_id,
            "Transferred business"
        );

        Ok(business_dto(business))
    }
}

fn validate_settings(payload: UpdateBusinessDto) -> Result<BusinessSettings, Error> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(MenuError::validation("Business name is required").into());
    }

    let alias = payload.alias.trim().to_string();
    if !is_valid_alias(&alias) {
        return Err(MenuError::validation(
            "Alias may only contain lowercase letters, numbers, and hyphens",
        )
        .into());
    }

    let email = non_blank(payload.email);
    if email.as_deref().is_some_and(|email| !is_valid_email(email)) {
        return Err(MenuError::validation("Please enter a valid email address").into());
    }

    Ok(BusinessSettings {
        name,
        alias,
        address: payload.address.trim().to_string(),
        phone: non_blank(payload.phone),
        email,
        currency: payload.currency,
        business_type: payload.business_type,
    })
}
