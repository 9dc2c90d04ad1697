mod list;

use menuboard_test_utils::prelude::*;

use super::*;

/// Session view of an account, with the admin flag the allow-list would give it.
fn session_of(user: &entity::app_user::Model, is_admin: bool) -> SessionDto {
    SessionDto {
        user_id: user.id,
        email: user.email.clone(),
        is_admin,
    }
}
