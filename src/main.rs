#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use menuboard::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            model::{admin::AdminAllowList, app::AppState},
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = match startup::connect_to_session(&config).await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("Failed to connect to session store: {}", e);
                std::process::exit(1);
            }
        };
        let db = match startup::connect_to_database(&config).await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(
            public_url = %config.public_url,
            admins = config.admin_emails.len(),
            "Starting server"
        );

        let app_state = AppState {
            db,
            admins: AdminAllowList::new(config.admin_emails),
            public_url: config.public_url,
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(app_state)
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
