//! HTTP request handlers.

use axum::{extract::State, http::Uri, Json};
use chrono::Utc;

use crate::api::types::*;
use crate::domain::{DiagnosticReport, Listing};
use crate::error::ApiError;
use crate::AppState;

/// Greeting served at the service root.
pub const ROOT_MESSAGE: &str = "Hello from FastAPI Backend!";

/// Greeting served at `/api/hello`.
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

/// Service root.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    ),
    tag = "greetings"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// Hello endpoint.
///
/// GET /api/hello
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Hello message", body = MessageResponse)
    ),
    tag = "greetings"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}

/// Mock card deals, timestamped relative to now.
///
/// GET /api/listings
#[utoipa::path(
    get,
    path = "/api/listings",
    responses(
        (status = 200, description = "The five mock listings, ordered by id", body = [Listing])
    ),
    tag = "listings"
)]
pub async fn list_listings(State(state): State<AppState>) -> Json<Vec<Listing>> {
    let listings = state.catalog.render(Utc::now());

    tracing::debug!(count = listings.len(), "Serving listings");

    Json(listings)
}

/// Backend and database diagnostic.
///
/// GET /test
///
/// Always answers 200; collaborator failures are reported in the body.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostic report", body = DiagnosticReport)
    ),
    tag = "health"
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let report = state.probe.run().await;

    tracing::info!(
        database = %report.database,
        connection_status = %report.connection_status,
        collections = report.collections.len(),
        "Diagnostic probe complete"
    );

    Json(report)
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::NotFound
}
