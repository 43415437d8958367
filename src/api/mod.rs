//! HTTP API layer for the Cartel API.
//!
//! Provides the greeting, listings and diagnostic endpoints.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
