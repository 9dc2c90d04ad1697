pub mod business_manager;
pub mod dashboard;
pub mod home;
pub mod newsletter;
pub mod not_found;
pub mod public_menu;
pub mod qr_code;

pub use business_manager::BusinessManager;
pub use dashboard::Dashboard;
pub use home::Home;
pub use newsletter::Newsletter;
pub use not_found::NotFound;
pub use public_menu::PublicMenu;
pub use qr_code::QrCode;

use crate::{client::api::ApiError, model::view::PageState};

/// Maps a pending or finished fetch onto the page state machine.
fn page_state<T: Clone>(
    result: Option<&Result<T, ApiError>>,
    populated: impl FnOnce(T) -> PageState<T>,
) -> PageState<T> {
    match result {
        None => PageState::Loading,
        Some(Ok(data)) => populated(data.clone()),
        Some(Err(err)) if err.is_not_found() => PageState::NotFound,
        Some(Err(err)) => PageState::Failed(err.message.clone()),
    }
}
