use dioxus::prelude::*;

use crate::client::{
    components::Shell,
    routes::{BusinessManager, Dashboard, Home, Newsletter, NotFound, PublicMenu, QrCode},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]

        #[route("/")]
        Home {},

        #[route("/dashboard")]
        Dashboard {},

        #[route("/business/manage/:id")]
        BusinessManager { id: i32 },

        #[route("/newsletter")]
        Newsletter {},

    #[end_layout]

    #[route("/business/:alias")]
    PublicMenu { alias: String },

    #[route("/business/:alias/qrcode")]
    QrCode { alias: String },

    #[layout(Shell)]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
