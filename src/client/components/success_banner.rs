use dioxus::prelude::*;

#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div { role: "alert", class: "alert alert-success",
            span { "{message}" }
        }
    }
}
