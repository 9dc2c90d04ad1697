//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. Handlers
//! sharing a path are registered in one `routes!` call so they end up on a single method
//! router. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, admins, public_url };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Menuboard", description = "Menuboard API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session routes"),
        (name = controller::business::BUSINESS_TAG, description = "Business management routes"),
        (name = controller::catalog::CATALOG_TAG, description = "Menu category and item routes"),
        (name = controller::menu::MENU_TAG, description = "Public menu and QR code routes"),
        (name = controller::newsletter::NEWSLETTER_TAG, description = "Newsletter routes"),
        (name = controller::user::USER_TAG, description = "Admin user lookup routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::signin))
        .routes(routes!(controller::auth::signout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(
            controller::business::list_businesses,
            controller::business::create_business
        ))
        .routes(routes!(
            controller::business::get_business,
            controller::business::update_business,
            controller::business::delete_business
        ))
        .routes(routes!(controller::business::get_business_owner))
        .routes(routes!(controller::business::transfer_business))
        .routes(routes!(controller::catalog::get_catalog))
        .routes(routes!(controller::catalog::create_category))
        .routes(routes!(
            controller::catalog::update_category,
            controller::catalog::delete_category
        ))
        .routes(routes!(controller::catalog::create_item))
        .routes(routes!(
            controller::catalog::update_item,
            controller::catalog::delete_item
        ))
        .routes(routes!(controller::menu::get_public_menu))
        .routes(routes!(controller::menu::get_qr_code))
        .routes(routes!(controller::menu::download_qr_code))
        .routes(routes!(controller::newsletter::subscribe))
        .routes(routes!(controller::user::search_users))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
