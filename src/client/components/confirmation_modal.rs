use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::SaveFuture;

/// Asks before a destructive action.
///
/// Both buttons are disabled while `on_confirm` runs. The modal closes when it succeeds and
/// stays open when it fails.
#[component]
pub fn ConfirmationModal(
    title: String,
    message: String,
    confirm_text: String,
    on_confirm: Callback<(), SaveFuture>,
    on_close: EventHandler<()>,
) -> Element {
    let mut busy = use_signal(|| false);

    let confirm = move |_| {
        if busy() {
            return;
        }
        busy.set(true);

        spawn(async move {
            let result = on_confirm.call(()).await;
            busy.set(false);

            match result {
                Ok(()) => on_close.call(()),
                Err(err) => tracing::error!("Confirmed action failed: {}", err),
            }
        });
    };

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        disabled: busy(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-error", disabled: busy(), onclick: confirm,
                        if busy() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
