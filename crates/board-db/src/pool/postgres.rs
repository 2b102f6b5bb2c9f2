//! PostgreSQL connection pool management

use std::path::Path;
use std::time::Duration;

use board_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Directory holding the SQL migrations shipped with this crate
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Maximum time to wait for a pooled connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a new PostgreSQL connection pool
///
/// Connections are opened lazily; call [`ping`] to verify the store is
/// reachable.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect_lazy(&config.url)?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool configured"
    );

    Ok(pool)
}

/// Round-trip a trivial query to prove the store is reachable
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the bundled migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    migrator.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
