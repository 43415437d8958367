//! The optional database collaborator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::error::CollaboratorError;

/// How long a probe waits for a pooled connection before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// A database handle the service can introspect.
///
/// Implementations must fail fast; the diagnostic endpoint calls
/// `list_collections` inline while serving a request.
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// Whether the handle has been initialized.
    fn is_available(&self) -> bool;

    /// Database name, if known.
    fn name(&self) -> Option<String>;

    /// Names of the collections (tables) in the database.
    async fn list_collections(&self) -> Result<Vec<String>, CollaboratorError>;
}

/// Where the collaborator stands after startup resolution.
#[derive(Clone)]
pub enum DatabaseSlot {
    /// The database feature is not installed.
    Missing,
    /// The feature is installed but opening the handle failed.
    Broken(String),
    /// A handle is attached, initialized or not.
    Attached(Arc<dyn DatabaseHandle>),
}

impl DatabaseSlot {
    /// Resolve the collaborator from configuration.
    pub fn resolve(config: &DatabaseConfig) -> Self {
        if !config.enabled {
            return DatabaseSlot::Missing;
        }

        let name = config.name().map(str::to_string);
        match config.url() {
            None => DatabaseSlot::Attached(Arc::new(SqliteDatabase::uninitialized(name))),
            Some(url) => match SqliteDatabase::connect_lazy(url, name) {
                Ok(db) => DatabaseSlot::Attached(Arc::new(db)),
                Err(e) => DatabaseSlot::Broken(e.to_string()),
            },
        }
    }

    /// The initialized handle, or the reason there is none.
    pub fn handle(&self) -> Result<Arc<dyn DatabaseHandle>, CollaboratorError> {
        match self {
            DatabaseSlot::Missing => Err(CollaboratorError::Missing),
            DatabaseSlot::Broken(reason) => Err(CollaboratorError::Failure(reason.clone())),
            DatabaseSlot::Attached(handle) if !handle.is_available() => {
                Err(CollaboratorError::Uninitialized)
            }
            DatabaseSlot::Attached(handle) => Ok(Arc::clone(handle)),
        }
    }

    /// Short label for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            DatabaseSlot::Missing => "missing",
            DatabaseSlot::Broken(_) => "broken",
            DatabaseSlot::Attached(handle) if handle.is_available() => "attached",
            DatabaseSlot::Attached(_) => "uninitialized",
        }
    }
}

impl std::fmt::Debug for DatabaseSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseSlot::Broken(reason) => f.debug_tuple("Broken").field(reason).finish(),
            _ => f.write_str(self.describe()),
        }
    }
}

/// SQLite-backed handle. Tables play the role of collections.
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: Option<SqlitePool>,
    name: Option<String>,
}

impl SqliteDatabase {
    /// Wrap an existing pool.
    pub fn new(pool: SqlitePool, name: Option<String>) -> Self {
        Self {
            pool: Some(pool),
            name,
        }
    }

    /// A handle with no connection behind it.
    pub fn uninitialized(name: Option<String>) -> Self {
        Self { pool: None, name }
    }

    /// Build a pool that connects on first use.
    pub fn connect_lazy(url: &str, name: Option<String>) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(url)?;
        Ok(Self::new(pool, name))
    }
}

#[async_trait]
impl DatabaseHandle for SqliteDatabase {
    fn is_available(&self) -> bool {
        self.pool.is_some()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    async fn list_collections(&self) -> Result<Vec<String>, CollaboratorError> {
        let pool = self.pool.as_ref().ok_or(CollaboratorError::Uninitialized)?;

        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(names)
    }
}
