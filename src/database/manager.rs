use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::store::Store;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors raised by the store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {entity} {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A foreign key or association names a row that does not exist.
    #[error("Invalid reference in '{field}': {id}")]
    MissingReference { field: String, id: i64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Migration(#[from] MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DatabaseError::NotFound { entity, id }
    }

    pub fn missing_reference(field: impl Into<String>, id: i64) -> Self {
        DatabaseError::MissingReference {
            field: field.into(),
            id,
        }
    }
}

/// Open the SQLite pool described by `config`.
///
/// In-memory databases live as long as their connection, so they are pinned
/// to a single connection that never idles out.
pub async fn connect(config: &DatabaseConfig) -> Result<Store, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));
    if config.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    info!("Created database pool for: {}", config.url);
    Ok(Store::new(pool))
}

impl Store {
    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        MIGRATOR.run(self.pool()).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }
}
