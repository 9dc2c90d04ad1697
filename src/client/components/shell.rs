use dioxus::prelude::*;

use crate::client::{
    components::{Footer, Header},
    router::Route,
};

/// Header and footer chrome around every page except the public menu views.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "flex flex-col min-h-screen",
            Header {}
            main { class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
