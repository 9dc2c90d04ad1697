use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaQrcode, FaScissors, FaUtensils, FaWineGlass};
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route, store::auth::AuthState};
use crate::model::business::BusinessType;

#[component]
pub fn Home() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let signed_in = auth.read().session.is_some();

    rsx!(
        Title { "Menuboard" }
        Meta {
            name: "description",
            content: "Digital menus for restaurants, bars, and barbers."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-8 py-12 max-w-256",
                div { class: "flex flex-col items-center gap-2 text-center",
                    h1 { class: "text-4xl font-bold", "Your menu, one scan away" }
                    p { class: "text-lg",
                        "Publish your menu or price list online, share it with a link, and print a QR code for your tables, bar, or chairs."
                    }
                }
                if signed_in {
                    Link { to: Route::Dashboard {}, class: "btn btn-primary w-48",
                        "Go to dashboard"
                    }
                } else {
                    p { class: "text-sm opacity-70", "Sign in or create an account to get started." }
                }
                ul { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for kind in BusinessType::ALL {
                        li { key: "{kind.id()}", class: "card bg-base-200 shadow-sm",
                            div { class: "card-body items-center text-center",
                                BusinessTypeIcon { kind }
                                h2 { class: "card-title", "{kind.name()}" }
                                p { "{kind.description()}" }
                            }
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    Icon { width: 24, height: 24, icon: FaQrcode }
                    p { "Every menu gets its own address and a QR code ready to print." }
                }
            }
        }
    )
}

#[component]
fn BusinessTypeIcon(kind: BusinessType) -> Element {
    match kind {
        BusinessType::Restaurant => rsx!(Icon { width: 32, height: 32, icon: FaUtensils }),
        BusinessType::Bar => rsx!(Icon { width: 32, height: 32, icon: FaWineGlass }),
        BusinessType::Barber => rsx!(Icon { width: 32, height: 32, icon: FaScissors }),
    }
}
