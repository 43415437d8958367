//! Domain types for the Cartel API.
//!
//! This module contains the listing records and the diagnostic report.

mod diagnostics;
mod listing;

pub use diagnostics::*;
pub use listing::*;
