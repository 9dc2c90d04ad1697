mod item;

use menuboard_test_utils::prelude::*;

use super::*;

fn owner_session(user: &entity::app_user::Model) -> SessionDto {
    SessionDto {
        user_id: user.id,
        email: user.email.clone(),
        is_admin: false,
    }
}

fn category_form(name: &str) -> CategoryFormDto {
    CategoryFormDto {
        name: name.to_string(),
        description: None,
    }
}

fn item_form(category_id: i32, name: &str, price: f64) -> ItemFormDto {
    ItemFormDto {
        category_id,
        name: name.to_string(),
        description: None,
        price,
    }
}
