//! Diagnostic report types for `GET /test`.
//!
//! Statuses are plain enums; the display strings shown to clients live in
//! the `Display` impls and nowhere else.

use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Backend liveness. The service only ever reports itself as running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Running,
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendStatus::Running => write!(f, "✅ Running"),
        }
    }
}

/// Outcome of probing the database collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// Nothing has been probed yet.
    NotAvailable,
    /// A live handle was found; collections not yet listed.
    Available,
    /// Handle found and collections listed.
    ConnectedAndWorking,
    /// Handle found but listing collections failed.
    ConnectedWithError(String),
    /// Collaborator installed but its handle is unset.
    Uninitialized,
    /// Collaborator not installed.
    NotFound,
    /// Any other failure while probing.
    Error(String),
}

impl std::fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => write!(f, "❌ Not Available"),
            DatabaseStatus::Available => write!(f, "✅ Available"),
            DatabaseStatus::ConnectedAndWorking => write!(f, "✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(detail) => {
                write!(f, "⚠️  Connected but Error: {}", detail)
            }
            DatabaseStatus::Uninitialized => write!(f, "⚠️  Available but not initialized"),
            DatabaseStatus::NotFound => {
                write!(f, "❌ Database module not found (run enable-database first)")
            }
            DatabaseStatus::Error(detail) => write!(f, "❌ Error: {}", detail),
        }
    }
}

/// Whether a live collaborator handle was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    NotConnected,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Connected => write!(f, "Connected"),
            ConnectionStatus::NotConnected => write!(f, "Not Connected"),
        }
    }
}

/// Presence of a configuration value. The value itself is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Set,
    NotSet,
}

impl Presence {
    pub fn of<T>(value: Option<T>) -> Self {
        if value.is_some() {
            Presence::Set
        } else {
            Presence::NotSet
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Presence::Set => write!(f, "✅ Set"),
            Presence::NotSet => write!(f, "❌ Not Set"),
        }
    }
}

fn display<T: std::fmt::Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticReport {
    /// Backend liveness.
    #[serde(serialize_with = "display")]
    #[schema(value_type = String, example = "✅ Running")]
    pub backend: BackendStatus,
    /// Database collaborator status.
    #[serde(serialize_with = "display")]
    #[schema(value_type = String)]
    pub database: DatabaseStatus,
    /// Whether `DATABASE_URL` is configured.
    #[serde(serialize_with = "display")]
    #[schema(value_type = String, example = "❌ Not Set")]
    pub database_url: Presence,
    /// Whether `DATABASE_NAME` is configured.
    #[serde(serialize_with = "display")]
    #[schema(value_type = String, example = "❌ Not Set")]
    pub database_name: Presence,
    /// Whether a live handle was reached.
    #[serde(serialize_with = "display")]
    #[schema(value_type = String, example = "Not Connected")]
    pub connection_status: ConnectionStatus,
    /// Up to ten collection names.
    pub collections: Vec<String>,
}

impl DiagnosticReport {
    /// A report for a running backend before any collaborator was probed.
    pub fn new(database_url: Presence, database_name: Presence) -> Self {
        Self {
            backend: BackendStatus::Running,
            database: DatabaseStatus::NotAvailable,
            database_url,
            database_name,
            connection_status: ConnectionStatus::NotConnected,
            collections: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_of() {
        assert_eq!(Presence::of(Some("x")), Presence::Set);
        assert_eq!(Presence::of::<&str>(None), Presence::NotSet);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            DatabaseStatus::ConnectedWithError("no such table".to_string()).to_string(),
            "⚠️  Connected but Error: no such table"
        );
        assert_eq!(
            DatabaseStatus::Error("boom".to_string()).to_string(),
            "❌ Error: boom"
        );
        assert!(DatabaseStatus::NotFound.to_string().contains("not found"));
    }

    #[test]
    fn test_report_serializes_display_strings() {
        let report = DiagnosticReport::new(Presence::Set, Presence::NotSet);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["backend"], "✅ Running");
        assert_eq!(json["database"], "❌ Not Available");
        assert_eq!(json["database_url"], "✅ Set");
        assert_eq!(json["database_name"], "❌ Not Set");
        assert_eq!(json["connection_status"], "Not Connected");
        assert_eq!(json["collections"], serde_json::json!([]));
    }
}
