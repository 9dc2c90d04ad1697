use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{AddBusinessModal, ConfirmationModal, Page, RequireSession, SaveFuture},
        router::Route,
        routes::page_state,
        store::auth::AuthState,
    },
    model::{
        business::{BusinessDto, CreateBusinessDto},
        view::{ModalState, PageState},
    },
};

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | Menuboard" }
        Meta {
            name: "description",
            content: "Manage your businesses and their menus."
        }
        RequireSession {
            DashboardContent {}
        }
    )
}

#[component]
fn DashboardContent() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let mut businesses = use_resource(|| async move { api::business::list_businesses().await });
    let mut add_modal = use_signal(ModalState::<()>::default);
    let mut pending_delete = use_signal(|| None::<BusinessDto>);

    let create = move |payload: CreateBusinessDto| -> SaveFuture {
        Box::pin(async move {
            api::business::create_business(&payload).await?;
            businesses.restart();
            Ok(())
        })
    };

    let delete = move |_: ()| -> SaveFuture {
        let target = pending_delete();
        Box::pin(async move {
            if let Some(business) = target {
                api::business::delete_business(business.id).await?;
                businesses.restart();
            }
            Ok(())
        })
    };

    let state = page_state(Option::as_ref(&*businesses.read()), PageState::from_rows);
    let is_admin = auth.read().is_admin();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl font-bold",
                        if is_admin { "All businesses" } else { "Your businesses" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| add_modal.write().open_create(),
                        "Add business"
                    }
                }
                match state {
                    PageState::Loading => rsx!(
                        div { class: "skeleton h-32 w-full" }
                    ),
                    PageState::Empty => rsx!(
                        p { class: "opacity-70", "No businesses yet. Add one to start building its menu." }
                    ),
                    PageState::Populated(rows) => rsx!(
                        ul { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            for business in rows {
                                BusinessCard {
                                    key: "{business.id}",
                                    business: business.clone(),
                                    on_delete: move |business| pending_delete.set(Some(business)),
                                }
                            }
                        }
                    ),
                    PageState::NotFound => rsx!(
                        p { class: "opacity-70", "No businesses found." }
                    ),
                    PageState::Failed(message) => rsx!(
                        p { class: "text-error", "{message}" }
                    ),
                }
            }
        }
        if add_modal.read().is_open() {
            AddBusinessModal {
                on_save: create,
                on_close: move |_| add_modal.write().close(),
            }
        }
        if let Some(business) = pending_delete() {
            ConfirmationModal {
                title: "Delete business",
                message: format!("Delete {} with all of its categories and items? This cannot be undone.", business.name),
                confirm_text: "Delete",
                on_confirm: delete,
                on_close: move |_| pending_delete.set(None),
            }
        }
    )
}

#[component]
fn BusinessCard(business: BusinessDto, on_delete: EventHandler<BusinessDto>) -> Element {
    let target = business.clone();

    rsx!(
        li { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{business.name}" }
                p { class: "text-sm opacity-70", "{business.business_type} · /business/{business.alias}" }
                if !business.address.is_empty() {
                    p { class: "text-sm", "{business.address}" }
                }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::PublicMenu { alias: business.alias.clone() },
                        class: "btn btn-ghost btn-sm",
                        "View menu"
                    }
                    Link {
                        to: Route::BusinessManager { id: business.id },
                        class: "btn btn-primary btn-sm",
                        "Manage"
                    }
                    button {
                        class: "btn btn-error btn-outline btn-sm",
                        onclick: move |_| on_delete.call(target.clone()),
                        "Delete"
                    }
                }
            }
        }
    )
}
