//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::hello,
        handlers::list_listings,
        handlers::test_database,
    ),
    components(schemas(
        crate::api::types::MessageResponse,
        crate::domain::Listing,
        crate::domain::CartelCategory,
        crate::domain::DiagnosticReport,
    )),
    tags(
        (name = "greetings", description = "Static greeting endpoints"),
        (name = "listings", description = "Mock collectible-card listings"),
        (name = "health", description = "Backend and database diagnostics")
    ),
    info(
        title = "Cartel API",
        version = "0.1.0",
        description = "Card deals backend - mock listings and a database diagnostic",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// CORS is fully permissive with credentials allowed, so origins, methods
/// and headers are mirrored from the request.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Greetings
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        // Listings
        .route("/api/listings", get(handlers::list_listings))
        // Diagnostics
        .route("/test", get(handlers::test_database))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
