use sqlx::{Pool, Postgres, Sqlite};
use tracing::info;

/// Run all pending SQLite migrations
///
/// Embeds the SQL files from `migrations/sqlite` at compile time. Safe to run
/// multiple times as sqlx tracks which migrations have already been applied.
pub async fn run_sqlite_migrations(pool: &Pool<Sqlite>) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running SQLite migrations...");
    sqlx::migrate!("./migrations/sqlite").run(pool).await?;
    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Run all pending PostgreSQL migrations from `migrations/postgres`
pub async fn run_postgres_migrations(
    pool: &Pool<Postgres>,
) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running PostgreSQL migrations...");
    sqlx::migrate!("./migrations/postgres").run(pool).await?;
    info!("PostgreSQL migrations completed successfully");
    Ok(())
}
