//! Request-independent logic behind the API:
//! - Listing Catalog: the fixed table of mock listings
//! - Database Probe: maps collaborator outcomes to a diagnostic report

mod catalog;
mod probe;

pub use catalog::*;
pub use probe::*;
