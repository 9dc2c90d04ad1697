use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api, components::SignInModal, router::Route, store::auth::AuthState,
};

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<Signal<AuthState>>();
    let mut show_sign_in = use_signal(|| false);
    let nav = use_navigator();

    let sign_out = move |_| {
        spawn(async move {
            if let Err(err) = api::auth::sign_out().await {
                tracing::error!("Failed to sign out: {}", err);
                return;
            }
            auth.write().signed_out();
            nav.push(Route::Home {});
        });
    };

    let state = auth.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl",
                    "Menuboard"
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(session) = state.session.as_ref() {
                    p { class: "text-sm hidden sm:block", "{session.email}" }
                    Link { to: Route::Dashboard {}, class: "btn btn-primary",
                        "Dashboard"
                    }
                    button { class: "btn btn-outline", onclick: sign_out,
                        "Sign out"
                    }
                } else if state.fetched {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_sign_in.set(true),
                        "Sign in"
                    }
                }
            }
        }
        if show_sign_in() {
            SignInModal { on_close: move |_| show_sign_in.set(false) }
        }
    }
}
