//! Database model type aliases for test utilities, matching the server's aliases.

pub type UserModel = entity::app_user::Model;

pub type BusinessModel = entity::business::Model;

pub type CategoryModel = entity::menu_category::Model;

pub type ItemModel = entity::menu_item::Model;
