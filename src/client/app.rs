use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{api, router::Route, store::auth::AuthState};

#[component]
pub fn App() -> Element {
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));

    // Resolve the session once on load
    use_future(move || async move {
        match api::auth::get_session().await {
            Ok(Some(session)) => auth.write().signed_in(session),
            Ok(None) => auth.write().signed_out(),
            Err(err) => {
                tracing::error!("Failed to fetch session: {}", err);
                auth.write().signed_out();
            }
        }
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/daisyui@5"
        }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        Router::<Route> {}
    }
}
