use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migrations_missing")]
    MigrationsMissing,
    #[error("database.migration_error")]
    MigrationError,
}

/// Connection settings for the storefront database.
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: PathBuf,
}

impl DatabaseConfig {
    pub fn new(connection_string: String, migrations_path: impl Into<PathBuf>) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            migrations_path: migrations_path.into(),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionError)
}

/// Applies the `cart_entries` and `promotional_videos` migrations.
pub async fn run_migrations(pool: &PgPool, config: &DatabaseConfig) -> Result<(), DatabaseError> {
    if !config.migrations_path.exists() {
        return Err(DatabaseError::MigrationsMissing);
    }

    Migrator::new(config.migrations_path.as_path())
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}
