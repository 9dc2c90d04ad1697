use dioxus::prelude::*;

use crate::{
    client::components::SaveFuture,
    model::{
        catalog::{non_blank, parse_price, CategoryDto, ItemDto, ItemFormDto},
        form::FormStatus,
    },
};

/// Modal form creating an item, or editing `target` when given.
///
/// The category select lists the business's categories, so an edit can move the item.
#[component]
pub fn ItemForm(
    categories: Vec<CategoryDto>,
    target: Option<ItemDto>,
    on_save: Callback<ItemFormDto, SaveFuture>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = target.is_some();
    let first_category = categories.first().map(|c| c.id);

    let mut category_id = use_signal(|| target.as_ref().map(|i| i.category_id).or(first_category));
    let mut name = use_signal(|| target.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        target
            .as_ref()
            .and_then(|i| i.description.clone())
            .unwrap_or_default()
    });
    let mut price = use_signal(|| {
        target
            .as_ref()
            .map(|i| format!("{:.2}", i.price))
            .unwrap_or_default()
    });
    let mut status = use_signal(FormStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(category_id) = category_id() else {
            status.write().finish_err("Choose a category");
            return;
        };
        if name.read().trim().is_empty() {
            status.write().finish_err("Item name is required");
            return;
        }
        let parsed_price = match parse_price(&price.read()) {
            Ok(parsed_price) => parsed_price,
            Err(message) => {
                status.write().finish_err(message);
                return;
            }
        };
        if !status.write().begin() {
            return;
        }

        let payload = ItemFormDto {
            category_id,
            name: name.read().trim().to_string(),
            description: non_blank(Some(description())),
            price: parsed_price,
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
    let selected = category_id().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold",
                    if editing { "Edit item" } else { "Add item" }
                }
                form { class: "flex flex-col gap-3 mt-4", onsubmit: submit,
                    label { class: "label", "Category" }
                    select {
                        class: "select w-full",
                        value: "{selected}",
                        onchange: move |evt| category_id.set(evt.value().parse().ok()),
                        for category in categories.iter() {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                selected: Some(category.id) == category_id(),
                                "{category.name}"
                            }
                        }
                    }
                    label { class: "label", "Name" }
                    input {
                        class: "input w-full",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { class: "label", "Description" }
                    textarea {
                        class: "textarea w-full",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    label { class: "label", "Price" }
                    input {
                        class: "input w-full",
                        inputmode: "decimal",
                        placeholder: "0.00",
                        value: "{price}",
                        oninput: move |evt| price.set(evt.value()),
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
                            if busy { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}
