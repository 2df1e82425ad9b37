pub mod connection;
pub mod migrations;
pub mod models;
pub mod postgres_store;
pub mod sqlite_store;
pub mod store;

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
pub use postgres_store::PostgresStore;
pub use sqlite_store::SqliteStore;
pub use store::{Store, StoreError};

/// `DB_FILE` value that selects a throwaway in-memory database
pub const MEMORY_DB_FILE: &str = ":memory:";

/// Open the backend selected by the configuration
///
/// - `DATABASE_URL` set: PostgreSQL
/// - otherwise: SQLite at `DB_FILE` (or in memory for `:memory:`)
pub async fn connect(config: &Config) -> Result<Arc<dyn Store>, StoreError> {
    if let Some(database_url) = &config.database_url {
        info!("Using DATABASE_URL (PostgreSQL), ssl={}", config.db_ssl);
        let store =
            PostgresStore::connect(database_url, config.db_ssl, config.max_db_connections).await?;
        return Ok(Arc::new(store));
    }

    if config.db_file.as_os_str() == MEMORY_DB_FILE {
        info!("Using in-memory SQLite");
        return Ok(Arc::new(SqliteStore::in_memory().await?));
    }

    info!("Using SQLite at {}", config.db_file.display());
    let store = SqliteStore::open(&config.db_file, config.max_db_connections).await?;
    Ok(Arc::new(store))
}
