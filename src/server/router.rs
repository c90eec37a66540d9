//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /pokemon` - One page of the catalog, optionally filtered on `importe`
/// - `POST /pokemon` - Create a record
/// - `GET /pokemon/{id}` - Get a record
/// - `PUT /pokemon/{id}` - Replace a record
/// - `PATCH /pokemon/{id}` - Partially update a record
/// - `DELETE /pokemon/{id}` - Delete a record
/// - `POST /api/import` - Import the generation one catalog from the source API
///
/// The OpenAPI specification is served at `/docs/openapi.json` and browsable through Swagger UI
/// at `/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "RetroDex", description = "RetroDex API"), tags(
        (name = controller::pokemon::POKEMON_TAG, description = "Catalog record routes"),
        (name = controller::import::IMPORT_TAG, description = "Bulk import routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::pokemon::list_pokemon,
            controller::pokemon::create_pokemon
        ))
        .routes(routes!(
            controller::pokemon::get_pokemon,
            controller::pokemon::replace_pokemon,
            controller::pokemon::patch_pokemon,
            controller::pokemon::delete_pokemon
        ))
        .routes(routes!(controller::import::run_import))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api));

    routes
}
