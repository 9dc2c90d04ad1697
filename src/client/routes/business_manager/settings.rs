use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{api, components::SuccessBanner, util::timer::sleep},
    model::{
        alias::{is_valid_alias, AliasField},
        business::{BusinessDto, BusinessType, Currency, UpdateBusinessDto},
        catalog::non_blank,
        form::FormStatus,
        user::is_valid_email,
    },
};

/// How long the saved banner stays up.
const SAVED_BANNER_MILLIS: u32 = 3_000;
const COPIED_MILLIS: u32 = 2_000;

#[component]
pub fn BusinessSettingsForm(business: BusinessDto, on_saved: EventHandler<()>) -> Element {
    let business_id = business.id;

    let mut alias = use_signal(|| AliasField::new(business.name.clone(), business.alias.clone()));
    let mut address = use_signal(|| business.address.clone());
    let mut phone = use_signal(|| business.phone.clone().unwrap_or_default());
    let mut email = use_signal(|| business.email.clone().unwrap_or_default());
    let mut currency = use_signal(|| business.currency);
    let mut business_type = use_signal(|| business.business_type);
    let mut status = use_signal(FormStatus::default);
    let mut saved = use_signal(|| false);
    let mut copied = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let field = alias();
        if field.name().trim().is_empty() {
            status.write().finish_err("Business name is required");
            return;
        }
        if !is_valid_alias(field.alias()) {
            status
                .write()
                .finish_err("Alias may only contain lowercase letters, numbers, and hyphens");
            return;
        }
        let contact_email = non_blank(Some(email()));
        if contact_email.as_deref().is_some_and(|e| !is_valid_email(e)) {
            status.write().finish_err("Please enter a valid email address");
            return;
        }
        if !status.write().begin() {
            return;
        }
        saved.set(false);

        let payload = UpdateBusinessDto {
            name: field.name().trim().to_string(),
            alias: field.alias().to_string(),
            address: address.read().trim().to_string(),
            phone: non_blank(Some(phone())),
            email: contact_email,
            currency: currency(),
            business_type: business_type(),
        };

        spawn(async move {
            match api::business::update_business(business_id, &payload).await {
                Ok(_) => {
                    status.write().finish_ok();
                    saved.set(true);
                    on_saved.call(());

                    sleep(SAVED_BANNER_MILLIS).await;
                    saved.set(false);
                }
                Err(err) => status.write().finish_err(err.message),
            }
        });
    };

    let copy_link = move |_| {
        let script = copy_link_script(alias.read().alias());
        spawn(async move {
            match document::eval(&script).await {
                Ok(_) => {
                    copied.set(true);
                    sleep(COPIED_MILLIS).await;
                    copied.set(false);
                }
                Err(err) => tracing::error!("Failed to copy menu link: {:?}", err),
            }
        });
    };

    let busy = status.read().is_busy();
    let field = alias.read().clone();

    rsx!(
        section { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Settings" }
                if saved() {
                    SuccessBanner { message: "Business settings saved" }
                }
                form { class: "grid grid-cols-1 md:grid-cols-2 gap-3", onsubmit: submit,
                    label { class: "flex flex-col gap-1",
                        span { "Name" }
                        input {
                            class: "input w-full",
                            value: "{field.name()}",
                            oninput: move |evt| alias.write().set_name(evt.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Alias" }
                        div { class: "join w-full",
                            input {
                                class: "input join-item w-full",
                                value: "{field.alias()}",
                                oninput: move |evt| alias.write().type_alias(&evt.value()),
                            }
                            button {
                                class: "btn join-item",
                                r#type: "button",
                                onclick: copy_link,
                                if copied() { "Copied!" } else { "Copy link" }
                            }
                        }
                        span { class: "text-xs opacity-70", "/business/{field.alias()}" }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Address" }
                        input {
                            class: "input w-full",
                            value: "{address}",
                            oninput: move |evt| address.set(evt.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Phone" }
                        input {
                            class: "input w-full",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Email" }
                        input {
                            class: "input w-full",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Currency" }
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Some(code) = Currency::from_code(&evt.value()) {
                                    currency.set(code);
                                }
                            },
                            for option_currency in Currency::ALL {
                                option {
                                    key: "{option_currency.code()}",
                                    value: "{option_currency.code()}",
                                    selected: option_currency == currency(),
                                    "{option_currency.name()} ({option_currency.symbol()})"
                                }
                            }
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Business type" }
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Some(kind) = BusinessType::from_id(&evt.value()) {
                                    business_type.set(kind);
                                }
                            },
                            for kind in BusinessType::ALL {
                                option {
                                    key: "{kind.id()}",
                                    value: "{kind.id()}",
                                    selected: kind == business_type(),
                                    "{kind.name()}"
                                }
                            }
                        }
                    }
                    div { class: "md:col-span-2 flex items-center justify-end gap-2",
                        if let Some(error) = status.read().error() {
                            p { class: "text-error text-sm", "{error}" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                            if busy { "Saving..." } else { "Save settings" }
                        }
                    }
                }
            }
        }
    )
}

/// Clipboard script writing the absolute public menu URL for `alias`.
fn copy_link_script(alias: &str) -> String {
    format!(
        "await navigator.clipboard.writeText(window.location.origin + {:?}); return true;",
        format!("/business/{}", alias)
    )
}
