//! Atlas API
//!
//! A CRUD service for users, teams and team memberships backed by
//! PostgreSQL. The repositories enforce the relational integrity rules
//! the HTTP surface relies on: unique emails, existing references for
//! memberships, full-replace vs. merge update semantics, and cascade
//! deletion of memberships.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::membership::{InMemoryMembershipRepository, PostgresMembershipRepository};
use infrastructure::memory::MemoryStore;
use infrastructure::storage::{self, StorageBackend, migrations};
use infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository};
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

/// Create the application state with repositories for the configured
/// storage backend
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend = StorageBackend::from_str(&config.database.backend)
        .unwrap_or(StorageBackend::Postgres);

    info!("Storage backend: {:?}", backend);

    match backend {
        StorageBackend::Postgres => {
            let mut database = config.database.clone();

            // DATABASE_URL wins over the config file when present.
            if let Ok(url) = std::env::var("DATABASE_URL") {
                database.url = url;
            }

            let pool = storage::connect_pool(&database).await?;
            migrations::run_schema_migrations(&pool).await?;
            info!("PostgreSQL connection established");

            Ok(AppState {
                users: Arc::new(PostgresUserRepository::new(pool.clone())),
                teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
                members: Arc::new(PostgresMembershipRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            let store = Arc::new(MemoryStore::new());

            Ok(AppState {
                users: Arc::new(InMemoryUserRepository::new(store.clone())),
                teams: Arc::new(InMemoryTeamRepository::new(store.clone())),
                members: Arc::new(InMemoryMembershipRepository::new(store)),
            })
        }
    }
}
