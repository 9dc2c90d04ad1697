mod catalog;
mod settings;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        api::{self, ApiError},
        components::{Page, RequireSession, SaveFuture, TransferBusinessModal},
        router::Route,
        routes::page_state,
        store::auth::AuthState,
    },
    model::{user::UserDto, view::PageState},
};

use catalog::CatalogSection;
use settings::BusinessSettingsForm;

#[component]
pub fn BusinessManager(id: i32) -> Element {
    rsx!(
        Title { "Manage business | Menuboard" }
        Meta {
            name: "description",
            content: "Edit business settings, categories, and items."
        }
        RequireSession {
            BusinessManagerContent { key: "{id}", id }
        }
    )
}

#[component]
fn BusinessManagerContent(id: i32) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let is_admin = auth.read().is_admin();

    let mut business_resource =
        use_resource(move || async move { api::business::get_business(id).await });
    let mut owner = use_resource(move || async move {
        if is_admin {
            Some(api::business::get_business_owner(id).await)
        } else {
            None
        }
    });
    let mut show_transfer = use_signal(|| false);

    let transfer = move |user_id: i32| -> SaveFuture {
        Box::pin(async move {
            api::business::transfer_business(id, user_id).await?;
            business_resource.restart();
            owner.restart();
            Ok(())
        })
    };

    let state = page_state(
        Option::as_ref(&*business_resource.read()),
        PageState::Populated,
    );

    let business = match state {
        PageState::Populated(business) => business,
        PageState::Loading | PageState::Empty => {
            return rsx!(
                Page { class: "flex justify-center",
                    div { class: "skeleton h-64 w-full max-w-[1080px]" }
                }
            )
        }
        PageState::NotFound => {
            return rsx!(
                Page { class: "flex flex-col items-center gap-4 py-24",
                    h1 { class: "text-2xl font-bold", "Business not found" }
                    Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
                }
            )
        }
        PageState::Failed(message) => {
            return rsx!(
                Page { class: "flex justify-center",
                    p { class: "text-error", "{message}" }
                }
            )
        }
    };

    let owner_email = owner_label(Option::as_ref(&*owner.read()).and_then(Option::as_ref));

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] flex flex-col gap-6",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl font-bold", "{business.name}" }
                    Link { to: Route::Dashboard {}, class: "btn btn-ghost", "Back to dashboard" }
                }
                BusinessSettingsForm {
                    business: business.clone(),
                    on_saved: move |_| business_resource.restart(),
                }
                section { class: "card bg-base-200 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Useful links" }
                        ul { class: "flex flex-wrap gap-2",
                            li {
                                Link {
                                    to: Route::PublicMenu { alias: business.alias.clone() },
                                    class: "btn btn-outline btn-sm",
                                    "Public catalog"
                                }
                            }
                            li {
                                Link {
                                    to: Route::QrCode { alias: business.alias.clone() },
                                    class: "btn btn-outline btn-sm",
                                    "QR code"
                                }
                            }
                        }
                    }
                }
                if is_admin {
                    section { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body",
                            h2 { class: "card-title", "Admin" }
                            p { "Owner: {owner_email}" }
                            div { class: "card-actions",
                                button {
                                    class: "btn btn-warning btn-sm",
                                    onclick: move |_| show_transfer.set(true),
                                    "Transfer business"
                                }
                            }
                        }
                    }
                }
                CatalogSection { business_id: id, currency: business.currency }
            }
        }
        if show_transfer() {
            TransferBusinessModal {
                business_name: business.name.clone(),
                on_save: transfer,
                on_close: move |_| show_transfer.set(false),
            }
        }
    )
}

/// Text for the admin owner line, empty while the lookup is still running.
fn owner_label(owner: Option<&Result<UserDto, ApiError>>) -> String {
    match owner {
        Some(Ok(owner)) => owner.email.clone(),
        Some(Err(err)) => format!("Unavailable: {}", err),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::owner_label;
    use crate::{client::api::ApiError, model::user::UserDto};

    #[test]
    fn owner_label_shows_email_once_loaded() {
        let owner = Ok(UserDto {
            id: 1,
            email: "owner@example.com".to_string(),
        });

        assert_eq!(owner_label(Some(&owner)), "owner@example.com");
        assert_eq!(owner_label(None), "");
    }

    #[test]
    fn owner_label_reports_failed_lookup() {
        let owner = Err(ApiError::new(403, "Admin access required"));

        assert_eq!(owner_label(Some(&owner)), "Unavailable: Admin access required");
    }
}
