//! Storage layer for the Cartel API.
//!
//! The service stores nothing itself. This module only holds the optional
//! database collaborator reported on by the diagnostic endpoint, accessed via
//! SQLx with SQLite.

mod database;

pub use database::{DatabaseHandle, DatabaseSlot, SqliteDatabase};
