//! Migrate command - applies or reverts schema migrations

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{self, migrations};

/// Apply all pending migrations, or revert the last applied one
pub async fn run(revert: bool) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = url;
    }

    let pool = storage::connect_pool(&config.database).await?;

    if revert {
        match migrations::revert_last_migration(&pool).await? {
            Some(version) => info!("Reverted migration {}", version),
            None => info!("No applied migrations to revert"),
        }
    } else {
        migrations::run_schema_migrations(&pool).await?;
        info!("Schema migrations applied");
    }

    Ok(())
}
