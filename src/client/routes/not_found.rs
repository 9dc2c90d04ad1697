use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Title { "Page not found | Menuboard" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 py-24",
                h1 { class: "text-3xl font-bold", "404" }
                p { "The page /{segments.join(\"/\")} does not exist." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
            }
        }
    )
}
