//! PostgreSQL connection pooling and database error translation

pub mod migrations;

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage (for testing/development)
    Memory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::Memory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Opens a connection pool with bounded acquisition, so a request never
/// waits for a connection longer than the configured timeout
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e))
        })
}

/// Translates constraint violations raised by the database into domain
/// outcomes. The schema constraints are the authoritative guard behind
/// the repositories' fast-path checks, so a racing write surfaces here
/// as `Conflict`/`NotFound` rather than as a raw storage error.
pub(crate) fn translate_constraint(
    err: sqlx::Error,
    on_conflict: impl Into<String>,
    on_missing_ref: impl Into<String>,
    context: &str,
) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::conflict(on_conflict);
        }

        if db_err.is_foreign_key_violation() {
            return DomainError::not_found(on_missing_ref);
        }
    }

    DomainError::storage(format!("{}: {}", context, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_from_str() {
        assert_eq!(StorageBackend::from_str("memory"), Some(StorageBackend::Memory));
        assert_eq!(
            StorageBackend::from_str("in-memory"),
            Some(StorageBackend::Memory)
        );
        assert_eq!(
            StorageBackend::from_str("postgres"),
            Some(StorageBackend::Postgres)
        );
        assert_eq!(
            StorageBackend::from_str("postgresql"),
            Some(StorageBackend::Postgres)
        );
        assert_eq!(StorageBackend::from_str("pg"), Some(StorageBackend::Postgres));
        assert_eq!(StorageBackend::from_str("unknown"), None);
    }

    #[test]
    fn test_translate_constraint_fallback() {
        let err = translate_constraint(
            sqlx::Error::PoolTimedOut,
            "conflict",
            "missing",
            "Failed to create user",
        );

        match err {
            DomainError::Storage { message } => {
                assert!(message.starts_with("Failed to create user"));
            }
            other => panic!("expected storage error, got {:?}", other),
        }
    }
}
