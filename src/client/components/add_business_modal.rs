use dioxus::prelude::*;

use crate::{
    client::components::SaveFuture,
    model::{
        alias::{derive_alias, is_valid_alias},
        business::{BusinessType, CreateBusinessDto},
        form::FormStatus,
    },
};

#[component]
pub fn AddBusinessModal(
    on_save: Callback<CreateBusinessDto, SaveFuture>,
    on_close: EventHandler<()>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut business_type = use_signal(|| None::<BusinessType>);
    let mut status = use_signal(FormStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let trimmed = name.read().trim().to_string();
        if trimmed.is_empty() {
            status.write().finish_err("Business name is required");
            return;
        }
        if !is_valid_alias(&derive_alias(&trimmed)) {
            status
                .write()
                .finish_err("Business name must contain at least one letter or number");
            return;
        }
        let Some(business_type) = business_type() else {
            status.write().finish_err("Choose a business type");
            return;
        };
        if !status.write().begin() {
            return;
        }

        let payload = CreateBusinessDto {
            name: trimmed,
            business_type,
        };

        spawn(async move {
            match on_save.call(payload).await {
                Ok(()) => {
                    status.write().finish_ok();
                    on_close.call(());
                }
                Err(err) => status.write().finish_err(err.message),
            }
        });
    };

    let busy = status.read().is_busy();
    let alias_preview = derive_alias(name.read().trim());

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Add business" }
                form { class: "flex flex-col gap-3 mt-4", onsubmit: submit,
                    label { class: "label", "Name" }
                    input {
                        class: "input w-full",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    if !alias_preview.is_empty() {
                        p { class: "text-sm opacity-70", "Menu address: /business/{alias_preview}" }
                    }
                    label { class: "label", "Business type" }
                    div { class: "grid grid-cols-1 sm:grid-cols-3 gap-2",
                        for kind in BusinessType::ALL {
                            button {
                                key: "{kind.id()}",
                                r#type: "button",
                                class: if business_type() == Some(kind) {
                                    "btn btn-primary h-auto py-2 flex flex-col"
                                } else {
                                    "btn btn-outline h-auto py-2 flex flex-col"
                                },
                                onclick: move |_| business_type.set(Some(kind)),
                                span { class: "font-bold", "{kind.name()}" }
                                span { class: "text-xs font-normal", "{kind.description()}" }
                            }
                        }
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
                            if busy { "Creating..." } else { "Create" }
                        }
                    }
                }
            }
        }
    }
}
