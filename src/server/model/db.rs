//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// An account. `password_hash` is an Argon2id PHC string and never leaves the server.
pub type UserModel = entity::app_user::Model;

/// A business and its public alias.
///
/// # Fields (from `entity::business::Model`)
/// - `user_id` - Owning account
/// - `alias` - Unique URL slug of the public menu
/// - `currency_code` - `EUR`, `USD`, or `NOK`
/// - `business_type` - `restaurant`, `bar`, or `barber`
pub type BusinessModel = entity::business::Model;

/// A category of a business's catalog, sorted by `order`.
pub type CategoryModel = entity::menu_category::Model;

/// A priced item filed under one category.
pub type ItemModel = entity::menu_item::Model;

pub type SubscriberModel = entity::newsletter_subscriber::Model;
