use std::path::Path;

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::debug;

use crate::db::connection::{get_sqlite_file_connection, get_sqlite_memory_connection};
use crate::db::migrations::run_sqlite_migrations;
use crate::db::models::{AccountRow, ApplicationRow, JobRow, NewApplication, NewJob};
use crate::db::store::{Store, StoreError};

/// SQLite-backed store, either file-based or in-memory
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (and create if needed) the database file, including missing parent directories
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let pool = get_sqlite_file_connection(path, max_connections).await?;
        Ok(Self::new(pool))
    }

    /// Fresh, empty database that lives as long as the store
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = get_sqlite_memory_connection().await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn upsert_account(
        &self,
        email: &str,
        role: Option<&str>,
        otp: &str,
    ) -> Result<(), StoreError> {
        debug!("Upserting account: email={}", email);

        sqlx::query(
            r#"
            INSERT INTO accounts (email, role, otp)
            VALUES (?, ?, ?)
            ON CONFLICT(email) DO UPDATE SET
                role = excluded.role,
                otp = excluded.otp,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(email)
        .bind(role)
        .bind(otp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_account(&self, email: &str, otp: &str) -> Result<Option<AccountRow>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, role, otp, created_at, updated_at
            FROM accounts
            WHERE email = ? AND otp = ?
            "#,
        )
        .bind(email)
        .bind(otp)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_jobs(&self) -> Result<Vec<JobRow>, StoreError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, category, description, created_at, updated_at
            FROM jobs
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Listed {} jobs", rows.len());
        Ok(rows)
    }

    async fn create_job(&self, job: &NewJob) -> Result<JobRow, StoreError> {
        debug!("Creating job: title={}", job.title);

        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs (title, category, description)
            VALUES (?, ?, ?)
            RETURNING id, title, category, description, created_at, updated_at
            "#,
        )
        .bind(&job.title)
        .bind(&job.category)
        .bind(&job.description)
        .fetch_one(&self.pool)
        .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    async fn create_application(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRow, StoreError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (job_id, applicant_email)
            VALUES (?, ?)
            RETURNING id, job_id, applicant_email, created_at, updated_at
            "#,
        )
        .bind(application.job_id)
        .bind(&application.applicant_email)
        .fetch_one(&self.pool)
        .await?;

        debug!("Application created with id={} for job_id={}", row.id, row.job_id);
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        run_sqlite_migrations(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        let store = SqliteStore::in_memory().await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            category: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn upsert_replaces_otp_for_same_email() {
        let store = store().await;
        store.upsert_account("a@x.com", Some("candidate"), "111111").await.unwrap();
        store.upsert_account("a@x.com", Some("employer"), "222222").await.unwrap();

        assert!(store.find_account("a@x.com", "111111").await.unwrap().is_none());
        let account = store.find_account("a@x.com", "222222").await.unwrap().unwrap();
        assert_eq!(account.role.as_deref(), Some("employer"));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn find_account_requires_both_fields_to_match() {
        let store = store().await;
        store.upsert_account("a@x.com", None, "123456").await.unwrap();

        assert!(store.find_account("b@x.com", "123456").await.unwrap().is_none());
        assert!(store.find_account("a@x.com", "654321").await.unwrap().is_none());
        let account = store.find_account("a@x.com", "123456").await.unwrap().unwrap();
        assert_eq!(account.role, None);
    }

    #[tokio::test]
    async fn jobs_are_listed_newest_first() {
        let store = store().await;
        for title in ["first", "second", "third"] {
            store.create_job(&new_job(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_jobs()
            .await
            .unwrap()
            .into_iter()
            .map(|job| job.title)
            .collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn application_ids_increase() {
        let store = store().await;
        let first = store
            .create_application(&NewApplication { job_id: 42, applicant_email: "a@x.com".into() })
            .await
            .unwrap();
        let second = store
            .create_application(&NewApplication { job_id: 42, applicant_email: "b@x.com".into() })
            .await
            .unwrap();
        assert!(second.id > first.id);
        assert_eq!(second.job_id, 42);
    }

    #[tokio::test]
    async fn open_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("careerbridge-test-{}", std::process::id()));
        let path = dir.join("nested").join("store.db");

        let store = SqliteStore::open(&path, 1).await.unwrap();
        store.migrate().await.unwrap();
        store.ping().await.unwrap();
        store.close().await;

        assert!(path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
