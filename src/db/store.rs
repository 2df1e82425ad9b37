use async_trait::async_trait;

use crate::db::models::{AccountRow, ApplicationRow, JobRow, NewApplication, NewJob};

/// Any failure coming out of the persistence layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("failed to prepare database file: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence for accounts, jobs and applications.
///
/// Implemented once per backend; handlers only ever see `dyn Store`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert the account or replace role and otp of the row with the same email.
    async fn upsert_account(
        &self,
        email: &str,
        role: Option<&str>,
        otp: &str,
    ) -> Result<(), StoreError>;

    /// Exact match on both email and otp.
    async fn find_account(&self, email: &str, otp: &str) -> Result<Option<AccountRow>, StoreError>;

    /// All jobs, newest first.
    async fn list_jobs(&self) -> Result<Vec<JobRow>, StoreError>;

    async fn create_job(&self, job: &NewJob) -> Result<JobRow, StoreError>;

    /// No existence check is made against `jobs`.
    async fn create_application(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRow, StoreError>;

    /// Cheap round trip used by the health endpoints.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Create any missing tables. Safe to run repeatedly.
    async fn migrate(&self) -> Result<(), StoreError>;

    async fn close(&self);
}
