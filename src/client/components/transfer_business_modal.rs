use dioxus::prelude::*;

use crate::{
    client::{api, components::SaveFuture},
    model::{form::FormStatus, user::UserDto},
};

/// Shortest search term sent to the user lookup.
const MIN_SEARCH_LENGTH: usize = 3;

/// Admin form handing a business to another account, found by email as the admin types.
#[component]
pub fn TransferBusinessModal(
    business_name: String,
    on_save: Callback<i32, SaveFuture>,
    on_close: EventHandler<()>,
) -> Element {
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| None::<UserDto>);
    let mut status = use_signal(FormStatus::default);

    let results = use_resource(move || async move {
        let term = search();
        if term.trim().chars().count() < MIN_SEARCH_LENGTH {
            return Ok(Vec::new());
        }
        api::user::search_users(term.trim()).await
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(user) = selected() else {
            status.write().finish_err("Select the account to transfer to");
            return;
        };
        if !status.write().begin() {
            return;
        }

        spawn(async move {
            match on_save.call(user.id).await {
                Ok(()) => {
                    status.write().finish_ok();
                    on_close.call(());
                }
                Err(err) => status.write().finish_err(err.message),
            }
        });
    };

    let busy = status.read().is_busy();

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Transfer {business_name}" }
                form { class: "flex flex-col gap-3 mt-4", onsubmit: submit,
                    input {
                        class: "input w-full",
                        placeholder: "Search by email",
                        value: "{search}",
                        oninput: move |evt| {
                            selected.set(None);
                            search.set(evt.value());
                        },
                    }
                    match &*results.read() {
                        Some(Ok(users)) if users.is_empty() && search.read().trim().chars().count() >= MIN_SEARCH_LENGTH => rsx! {
                            p { class: "text-sm opacity-70", "No accounts match" }
                        },
                        Some(Ok(users)) => rsx! {
                            ul { class: "menu bg-base-200 rounded-box w-full",
                                for user in users.iter() {
                                    SearchResult {
                                        key: "{user.id}",
                                        active: selected.read().as_ref().map(|s| s.id) == Some(user.id),
                                        user: user.clone(),
                                        on_select: move |user| selected.set(Some(user)),
                                    }
                                }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            p { class: "text-error text-sm", "{err}" }
                        },
                        None => rsx! {},
                    }
                    if let Some(user) = selected.read().as_ref() {
                        p { class: "text-sm", "New owner: {user.email}" }
                    }
                    if let Some(error) = status.read().error() {
                        p { class: "text-error text-sm", "{error}" }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                            if busy { "Transferring..." } else { "Transfer business" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResult(user: UserDto, active: bool, on_select: EventHandler<UserDto>) -> Element {
    let email = user.email.clone();

    rsx! {
        li {
            a {
                class: if active { "menu-active" } else { "" },
                onclick: move |_| on_select.call(user.clone()),
                "{email}"
            }
        }
    }
}
