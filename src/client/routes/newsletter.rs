use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{api, components::{Page, SuccessBanner}},
    model::{form::FormStatus, user::is_valid_email},
};

#[component]
pub fn Newsletter() -> Element {
    let mut email = use_signal(String::new);
    let mut status = use_signal(FormStatus::default);
    let mut success = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if !is_valid_email(&email.read()) {
            status.write().finish_err("Please enter a valid email address");
            return;
        }
        if !status.write().begin() {
            return;
        }
        success.set(None);

        spawn(async move {
            match api::newsletter::subscribe(&email()).await {
                Ok(message) => {
                    status.write().finish_ok();
                    email.set(String::new());
                    success.set(Some(message));
                }
                Err(err) => status.write().finish_err(err.message),
            }
        });
    };

    let busy = status.read().is_busy();

    rsx!(
        Title { "Newsletter | Menuboard" }
        Meta {
            name: "description",
            content: "News about Menuboard features for restaurants, bars, and barbers."
        }
        Page { class: "flex justify-center",
            div { class: "card bg-base-200 shadow-sm w-full max-w-md mt-12",
                div { class: "card-body",
                    h1 { class: "card-title", "Newsletter" }
                    p { "Get news about new features, straight to your inbox." }
                    if let Some(message) = success() {
                        SuccessBanner { message }
                    }
                    form { class: "flex flex-col gap-3", onsubmit: submit,
                        input {
                            class: "input w-full",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(error) = status.read().error() {
                            p { class: "text-error text-sm", "{error}" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                            if busy { "Subscribing..." } else { "Subscribe" }
                        }
                    }
                }
            }
        }
    )
}
