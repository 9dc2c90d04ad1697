use dioxus::prelude::*;

use crate::{
    client::components::SaveFuture,
    model::{
        catalog::{non_blank, CategoryDto, CategoryFormDto},
        form::FormStatus,
    },
};

/// Modal form creating a category, or editing `target` when given.
#[component]
pub fn CategoryForm(
    target: Option<CategoryDto>,
    on_save: Callback<CategoryFormDto, SaveFuture>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = target.is_some();
    let mut name = use_signal(|| target.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        target
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default()
    });
    let mut status = use_signal(FormStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if name.read().trim().is_empty() {
            status.write().finish_err("Category name is required");
            return;
        }
        if !status.write().begin() {
            return;
        }

        let payload = CategoryFormDto {
            name: name.read().trim().to_string(),
            description: non_blank(Some(description())),
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

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold",
                    if editing { "Edit category" } else { "Add category" }
                }
                form { class: "flex flex-col gap-3 mt-4", onsubmit: submit,
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
