pub mod add_business_modal;
pub mod category_form;
pub mod confirmation_modal;
pub mod footer;
pub mod header;
pub mod item_form;
pub mod page;
pub mod require_session;
pub mod shell;
pub mod sign_in_modal;
pub mod success_banner;
pub mod transfer_business_modal;

pub use add_business_modal::AddBusinessModal;
pub use category_form::CategoryForm;
pub use confirmation_modal::ConfirmationModal;
pub use footer::Footer;
pub use header::Header;
pub use item_form::ItemForm;
pub use page::Page;
pub use require_session::RequireSession;
pub use shell::Shell;
pub use sign_in_modal::SignInModal;
pub use success_banner::SuccessBanner;
pub use transfer_business_modal::TransferBusinessModal;

use std::{future::Future, pin::Pin};

use crate::client::api::ApiError;

/// What a form or confirmation awaits from its owning page.
pub type SaveFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;
