use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer footer-center bg-base-200 p-4",
            div { class: "flex flex-col gap-1",
                p { "© 2025 Menuboard. Digital menus for restaurants, bars, and barbers." }
                Link { to: Route::Newsletter {}, class: "link",
                    "Subscribe to our newsletter"
                }
            }
        }
    }
}
