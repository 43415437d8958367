//! Database probe - builds the diagnostic report for `GET /test`.
//!
//! Every collaborator failure is caught here and turned into a status; the
//! probe itself cannot fail.

use crate::config::DatabaseConfig;
use crate::domain::{ConnectionStatus, DatabaseStatus, DiagnosticReport, Presence};
use crate::error::CollaboratorError;
use crate::storage::DatabaseSlot;

/// Maximum number of collection names included in a report.
pub const MAX_COLLECTIONS: usize = 10;

/// Probes the optional database collaborator.
#[derive(Debug, Clone)]
pub struct DatabaseProbe {
    slot: DatabaseSlot,
    url: Presence,
    name: Presence,
}

impl DatabaseProbe {
    /// Create a probe for the given slot and configuration presence flags.
    pub fn new(slot: DatabaseSlot, url: Presence, name: Presence) -> Self {
        Self { slot, url, name }
    }

    /// Create a probe from database configuration.
    pub fn from_config(slot: DatabaseSlot, config: &DatabaseConfig) -> Self {
        Self::new(slot, Presence::of(config.url()), Presence::of(config.name()))
    }

    /// Probe the collaborator and report on it.
    pub async fn run(&self) -> DiagnosticReport {
        let mut report = DiagnosticReport::new(self.url, self.name);

        let handle = match self.slot.handle() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, slot = self.slot.describe(), "Database collaborator unavailable");
                report.database = unavailable_status(&e);
                return report;
            }
        };

        report.database = DatabaseStatus::Available;
        report.connection_status = ConnectionStatus::Connected;

        match handle.list_collections().await {
            Ok(mut collections) => {
                tracing::debug!(
                    database = ?handle.name(),
                    collections = collections.len(),
                    "Database collaborator answered"
                );
                collections.truncate(MAX_COLLECTIONS);
                report.collections = collections;
                report.database = DatabaseStatus::ConnectedAndWorking;
            }
            Err(e) => {
                tracing::warn!(error = %e, database = ?handle.name(), "Failed to list collections");
                report.database = DatabaseStatus::ConnectedWithError(e.detail());
            }
        }

        report
    }
}

/// Status for a collaborator that never produced a usable handle.
fn unavailable_status(error: &CollaboratorError) -> DatabaseStatus {
    match error {
        CollaboratorError::Missing => DatabaseStatus::NotFound,
        CollaboratorError::Uninitialized => DatabaseStatus::Uninitialized,
        CollaboratorError::QueryFailed(_) | CollaboratorError::Failure(_) => {
            DatabaseStatus::Error(error.detail())
        }
    }
}
