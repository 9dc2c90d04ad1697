use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{api, router::Route, routes::page_state},
    model::{menu::QrCodeDto, view::PageState},
};

/// Printable QR code of a business menu, rendered without the site chrome.
#[component]
pub fn QrCode(alias: String) -> Element {
    rsx!(QrCodeContent { key: "{alias}", alias })
}

#[component]
fn QrCodeContent(alias: String) -> Element {
    let fetch_alias = alias.clone();
    let qr_code = use_resource(move || {
        let alias = fetch_alias.clone();
        async move { api::menu::get_qr_code(&alias).await }
    });

    let body = match page_state(Option::as_ref(&*qr_code.read()), PageState::Populated) {
        PageState::Populated(qr_code) => rsx!(QrCodeView { alias: alias.clone(), qr_code }),
        PageState::NotFound => rsx!(
            h1 { class: "text-2xl font-bold", "Menu not found" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go to Menuboard" }
        ),
        PageState::Failed(message) => rsx!(
            p { class: "text-error", "{message}" }
        ),
        PageState::Loading | PageState::Empty => rsx!(
            div { class: "skeleton h-64 w-64" }
        ),
    };

    rsx!(
        Title { "QR code | Menuboard" }
        Meta {
            name: "description",
            content: "QR code linking to a Menuboard menu"
        }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4 p-4",
            {body}
        }
    )
}

#[component]
fn QrCodeView(alias: String, qr_code: QrCodeDto) -> Element {
    let png_url = api::menu::qr_code_png_url(&alias);

    rsx!(
        div {
            class: "bg-white p-4 rounded w-72 h-72",
            dangerous_inner_html: "{qr_code.svg}"
        }
        a { class: "link text-sm", href: "{qr_code.menu_url}", "{qr_code.menu_url}" }
        div { class: "flex gap-2",
            a { class: "btn btn-primary", href: "{png_url}", download: "",
                "Download PNG"
            }
            Link { to: Route::PublicMenu { alias: alias.clone() }, class: "btn btn-outline",
                "View menu"
            }
        }
    )
}
