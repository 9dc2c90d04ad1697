use dioxus::prelude::*;

use crate::client::{router::Route, store::auth::AuthState};

/// Renders `children` only for a signed in user.
///
/// Once the session lookup has answered without a user, navigates home instead, so the
/// guarded page never starts its own fetches.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth.read();
        if state.fetched && state.session.is_none() {
            nav.replace(Route::Home {});
        }
    });

    let signed_in = auth.read().session.is_some();
    if signed_in {
        return children;
    }

    rsx! {
        div { class: "flex justify-center p-12",
            span { class: "loading loading-spinner loading-lg" }
        }
    }
}
